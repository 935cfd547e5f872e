//! Configuration management for the MCP server
//!
//! Handles environment variables and defaults for the fetch client and the
//! HTTP transport.

use crate::error::{ConfigError, CourseMcpError, Result};

/// Default `User-Agent` sent with every outbound fetch
pub const DEFAULT_USER_AGENT: &str = "MCP-Fetch-Tool/1.0";

/// Default bind host for the HTTP transport
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default bind port for the HTTP transport
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Configuration for the MCP server
#[derive(Debug, Clone)]
pub struct Config {
    /// `User-Agent` header applied to outbound requests unless the caller overrides it
    pub user_agent: String,

    /// Host the HTTP transport binds to
    pub http_host: String,

    /// Port the HTTP transport binds to
    pub http_port: u16,
}

impl Config {
    /// Create a configuration from the environment, falling back to defaults
    pub fn new() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user_agent = lookup("FETCH_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        if user_agent.trim().is_empty() {
            return Err(CourseMcpError::Config(ConfigError::InvalidConfig {
                message: "FETCH_USER_AGENT must not be empty".to_string(),
            }));
        }

        let http_host = lookup("MCP_HTTP_HOST").unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string());

        let http_port = match lookup("MCP_HTTP_PORT") {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                CourseMcpError::Config(ConfigError::InvalidEnvVar {
                    var: "MCP_HTTP_PORT".to_string(),
                    message: e.to_string(),
                })
            })?,
            None => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            user_agent,
            http_host,
            http_port,
        })
    }

    /// Socket address string for the HTTP transport
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.http_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(|var| match var {
            "FETCH_USER_AGENT" => Some("custom-agent/2.0".to_string()),
            "MCP_HTTP_PORT" => Some("8080".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.user_agent, "custom-agent/2.0");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_lookup(|var| (var == "MCP_HTTP_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("MCP_HTTP_PORT"));
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let result = Config::from_lookup(|var| (var == "FETCH_USER_AGENT").then(|| " ".to_string()));
        assert!(matches!(result, Err(CourseMcpError::Config(ConfigError::InvalidConfig { .. }))));
    }
}
