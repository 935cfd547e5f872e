//! HTTP fetch client
//!
//! Validates fetch requests, performs the outbound call and decodes the
//! response body according to its content type.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use validator::Validate;

use crate::config::Config;
use crate::error::{CourseMcpError, Result, ValidationError};
use crate::fetch::types::{FetchRequest, FetchResponse, HttpMethod, Payload};

/// Content type injected when a body is sent without one
pub const DEFAULT_BODY_CONTENT_TYPE: &str = "application/json";

/// A validated request, ready to send
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// URL exactly as the caller supplied it
    pub source: String,

    /// Parsed URL
    pub url: Url,

    pub method: HttpMethod,

    /// Default headers merged with the caller's
    pub headers: HeaderMap,

    /// Body, only kept for methods that carry one
    pub body: Option<String>,
}

/// How a response body is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Text,
}

impl BodyKind {
    /// Pick the decoding from a `Content-Type` header value
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let essence = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if essence == "application/json" || essence.ends_with("+json") {
            BodyKind::Json
        } else {
            // text/* and anything unknown are read as text
            BodyKind::Text
        }
    }
}

/// Client for the fetch tool
pub struct FetchClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// Default `User-Agent`
    user_agent: String,
}

impl FetchClient {
    /// Create a new fetch client
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Validate `request` and build the outbound request. Performs no I/O.
    pub fn prepare(&self, request: &FetchRequest) -> Result<PreparedRequest> {
        let invalid_url = |message: String| {
            CourseMcpError::Validation(ValidationError::InvalidUrl {
                url: request.url.clone(),
                message,
            })
        };

        // The url rule fails exactly when parsing fails; report the parser's reason
        if let Err(errors) = request.validate() {
            let message = match Url::parse(&request.url) {
                Err(e) => e.to_string(),
                Ok(_) => errors.to_string(),
            };
            return Err(invalid_url(message));
        }
        let url = Url::parse(&request.url).map_err(|e| invalid_url(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid_url(format!("unsupported scheme '{}'", url.scheme())));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &self.user_agent)?);

        if let Some(custom) = &request.headers {
            for (name, value) in custom {
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    CourseMcpError::Validation(ValidationError::InvalidHeader {
                        name: name.clone(),
                        message: e.to_string(),
                    })
                })?;
                headers.insert(header_name, header_value(name, value)?);
            }
        }

        let body = if request.method.allows_body() {
            request.body.clone()
        } else {
            if request.body.is_some() {
                tracing::debug!("Ignoring request body for {} {}", request.method, request.url);
            }
            None
        };

        if body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_BODY_CONTENT_TYPE));
        }

        Ok(PreparedRequest {
            source: request.url.clone(),
            url,
            method: request.method,
            headers,
            body,
        })
    }

    /// Send a prepared request once and decode the response
    pub async fn send(&self, prepared: PreparedRequest) -> Result<FetchResponse> {
        tracing::info!("Fetching {} {}", prepared.method, prepared.source);

        let mut builder = self
            .http_client
            .request(prepared.method.into(), prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("{} {} returned {}", prepared.method, prepared.source, status);

        let payload = decode_body(response).await?;

        Ok(FetchResponse {
            url: prepared.source,
            method: prepared.method,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            payload,
        })
    }

    /// Validate, send and decode
    pub async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        let prepared = self.prepare(request)?;
        self.send(prepared).await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        CourseMcpError::Validation(ValidationError::InvalidHeader {
            name: name.to_string(),
            message: e.to_string(),
        })
    })
}

async fn decode_body(response: reqwest::Response) -> Result<Payload> {
    let kind = BodyKind::from_content_type(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
    );

    let text = response.text().await?;

    match kind {
        // An empty body (e.g. 204) has nothing to parse
        BodyKind::Json if !text.trim().is_empty() => Ok(Payload::Json(serde_json::from_str(&text)?)),
        _ => Ok(Payload::Text(text)),
    }
}
