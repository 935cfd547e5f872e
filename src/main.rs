//! Course & Fetch MCP Server
//!
//! A Model Context Protocol (MCP) server with a course recommender and a
//! generic HTTP fetch tool.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use course_fetch_mcp_server::config::Config;
use course_fetch_mcp_server::error::Result;
use course_fetch_mcp_server::fetch::FetchClient;
use course_fetch_mcp_server::mcp::http;
use course_fetch_mcp_server::mcp::server::McpServer;

/// Course & Fetch MCP Server
#[derive(Parser)]
#[command(name = "course-fetch-mcp-server")]
#[command(author, version, about = "MCP server with course recommendations and an HTTP fetch tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over HTTP instead of stdio
    Http {
        /// Host to bind (overrides MCP_HTTP_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides MCP_HTTP_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::new()?;

    let fetch_client = Arc::new(FetchClient::new(&config));
    let server = Arc::new(McpServer::new(fetch_client));

    match cli.command {
        Some(Commands::Http { host, port }) => {
            if let Some(host) = host {
                config.http_host = host;
            }
            if let Some(port) = port {
                config.http_port = port;
            }
            http::serve(server, &config.http_addr()).await?;
        }
        None => {
            server.run_stdio().await?;
        }
    }

    Ok(())
}
