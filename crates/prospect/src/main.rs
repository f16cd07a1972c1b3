use clap::Parser;
use eyre::Result;

use prospect::cli::{Cli, Commands};
use prospect::commands::{Command, serve::ServeCommand, stdio::StdioCommand, tools::ToolsCommand};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Load .env file if it exists
    prospect::cli::config::load_env()?;

    prospect_core::utils::tracing::init_tracing(cli.log_file.as_deref())?;

    match cli.command {
        Commands::Serve { bind, port } => ServeCommand { port, bind }.execute().await,
        Commands::Stdio => StdioCommand.execute().await,
        Commands::Tools => ToolsCommand.execute().await,
    }
}
