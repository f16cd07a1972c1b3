use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MCP server that turns prospecting provider APIs into tools.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, author)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "PROSPECT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve MCP over HTTP (SSE at /sse, streamable HTTP at /mcp)
    Serve {
        /// Bind address
        #[arg(long, env = "PROSPECT_BIND", default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(long, env = "PROSPECT_PORT", default_value = "8787")]
        port: u16,
    },
    /// Serve a single MCP session over stdin/stdout
    Stdio,
    /// Print the tool catalogue as JSON and exit
    Tools,
}
