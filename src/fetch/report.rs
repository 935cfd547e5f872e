//! Fetch result text
//!
//! Builds the text returned to the caller for each fetch outcome.

use crate::error::CourseMcpError;
use crate::fetch::format::format_payload;
use crate::fetch::types::{FetchRequest, FetchResponse};

const NETWORK_DETAILS: &str =
    "Network error: could not reach the server. Check the URL and your network connection.";

const UNEXPECTED_DETAILS: &str = "An unexpected error occurred while processing the request.";

/// Text for a request that got an HTTP response. Returns `(text, is_error)`.
pub fn response_report(response: &FetchResponse) -> (String, bool) {
    let outcome = if response.is_success() {
        "Request successful"
    } else {
        "Request failed"
    };

    let mut text = format!(
        "{}\nURL: {}\nMethod: {}\nStatus: {} {}\n\n",
        outcome, response.url, response.method, response.status, response.status_text
    );

    if response.is_success() {
        text.push_str(&format_payload(&response.payload, &response.url));
    } else {
        text.push_str("Response:\n");
        text.push_str(&response.payload.to_pretty_string());
    }

    (text, !response.is_success())
}

/// Text for a request that never produced a response
pub fn error_report(request: &FetchRequest, err: &CourseMcpError) -> String {
    match err {
        CourseMcpError::Validation(e) => format!(
            "Invalid request\nURL: {}\nMethod: {}\nError: {}",
            request.url, request.method, e
        ),
        other => {
            let details = if other.is_network() {
                NETWORK_DETAILS
            } else {
                UNEXPECTED_DETAILS
            };
            format!(
                "Request error\nURL: {}\nMethod: {}\nMessage: {}\nDetails: {}",
                request.url, request.method, other, details
            )
        }
    }
}
