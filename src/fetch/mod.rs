//! HTTP fetch module
//!
//! Pass-through fetcher: validates a request, performs one HTTP call and
//! summarizes the response.

pub mod client;
pub mod format;
pub mod report;
pub mod types;

pub use client::FetchClient;
pub use format::format_payload;
pub use types::{FetchRequest, FetchResponse, HttpMethod, Payload};

/// Run one fetch and return `(text, is_error)`. Every failure becomes text.
pub async fn run(client: &FetchClient, request: &FetchRequest) -> (String, bool) {
    match client.fetch(request).await {
        Ok(response) => report::response_report(&response),
        Err(e) => {
            tracing::warn!("Fetch of {} failed: {}", request.url, e);
            (report::error_report(request, &e), true)
        }
    }
}
