//! Error types for the course/fetch MCP server
//!
//! This module defines the error hierarchy for all operations in the server.

use thiserror::Error;

/// Main error type for the MCP server
#[derive(Error, Debug)]
pub enum CourseMcpError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl CourseMcpError {
    /// Whether the failure happened before the request left the process
    /// or while reaching the remote host.
    pub fn is_network(&self) -> bool {
        match self {
            CourseMcpError::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            CourseMcpError::Io(_) => true,
            _ => false,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidEnvVar { var: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Transport error: {message}")]
    TransportError { message: String },
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, CourseMcpError>;
