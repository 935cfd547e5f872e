//! Course & Fetch MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing two tools: a static course
//! recommendation lookup and an HTTP fetcher that summarizes API responses.

pub mod config;
pub mod error;
pub mod fetch;
pub mod mcp;
pub mod recommend;

pub use config::Config;
pub use error::{CourseMcpError, Result};
