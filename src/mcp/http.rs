//! HTTP transport
//!
//! Serves JSON-RPC messages over `POST /mcp` with a permissive CORS policy.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::{CourseMcpError, McpError, Result};
use crate::mcp::server::McpServer;

/// Path of the JSON-RPC endpoint
pub const MCP_PATH: &str = "/mcp";

/// Build the HTTP router around `server`
pub fn router(server: Arc<McpServer>) -> Router {
    Router::new()
        .route(MCP_PATH, post(handle_post).options(preflight))
        .route("/health", get(health))
        .with_state(server)
}

/// Bind `addr` and serve until the process exits
pub async fn serve(server: Arc<McpServer>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        CourseMcpError::Mcp(McpError::TransportError {
            message: format!("failed to bind {}: {}", addr, e),
        })
    })?;

    tracing::info!("MCP server listening on http://{}{}", addr, MCP_PATH);
    axum::serve(listener, router(server)).await?;

    Ok(())
}

async fn handle_post(State(server): State<Arc<McpServer>>, body: String) -> Response {
    let response = match server.handle_message(&body).await {
        Some(message) => (StatusCode::OK, Json(message)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    };
    with_cors(response)
}

async fn preflight() -> Response {
    with_cors(StatusCode::NO_CONTENT.into_response())
}

async fn health() -> Response {
    Json(serde_json::json!({"status": "ok"})).into_response()
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::fetch::FetchClient;

    fn app() -> Router {
        router(Arc::new(McpServer::new(Arc::new(FetchClient::new(&Config::default())))))
    }

    #[tokio::test]
    async fn test_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(MCP_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }

    #[tokio::test]
    async fn test_post_tools_list() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(MCP_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_post_notification_accepted() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(MCP_PATH)
                    .body(Body::from(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
