//! Fetch tool types

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// HTTP method accepted by the fetch tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Whether a request body is sent for this method
    pub fn allows_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Arguments of the fetch tool
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct FetchRequest {
    /// The URL to request
    #[validate(url)]
    pub url: String,

    /// HTTP method (default: GET)
    #[serde(default)]
    pub method: HttpMethod,

    /// Additional request headers; these override the defaults
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,

    /// Request body, sent for POST, PUT and PATCH
    #[serde(default)]
    pub body: Option<String>,
}

impl FetchRequest {
    /// GET request for `url` with no extra headers
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: None,
            body: None,
        }
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body decoded from a JSON content type
    Json(Value),

    /// Body read as plain text
    Text(String),
}

impl Payload {
    /// Body as text: indented JSON for structured payloads, raw text otherwise
    pub fn to_pretty_string(&self) -> String {
        match self {
            Payload::Json(value) => format!("{:#}", value),
            Payload::Text(text) => text.clone(),
        }
    }
}

/// Response received from the remote endpoint
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Final request URL
    pub url: String,

    /// Method used
    pub method: HttpMethod,

    /// Numeric status code
    pub status: u16,

    /// Canonical reason phrase ("OK", "Not Found", ...)
    pub status_text: String,

    /// Decoded body
    pub payload: Payload,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let req: FetchRequest = serde_json::from_value(json!({"url": "https://example.com"})).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.headers.is_none());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_request_rejects_unknown_method() {
        let result: std::result::Result<FetchRequest, _> =
            serde_json::from_value(json!({"url": "https://example.com", "method": "TRACE"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_url_validation() {
        assert!(FetchRequest::get("https://api.example.com/users").validate().is_ok());
        assert!(FetchRequest::get("not a url").validate().is_err());
    }

    #[test]
    fn test_body_methods() {
        assert!(HttpMethod::Post.allows_body());
        assert!(HttpMethod::Patch.allows_body());
        assert!(!HttpMethod::Get.allows_body());
        assert!(!HttpMethod::Delete.allows_body());
    }

    #[test]
    fn test_payload_pretty_string() {
        let payload = Payload::Json(json!({"a": 1}));
        assert_eq!(payload.to_pretty_string(), "{\n  \"a\": 1\n}");
        assert_eq!(Payload::Text("plain".into()).to_pretty_string(), "plain");
    }
}
