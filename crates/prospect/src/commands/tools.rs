use std::io::Write;

use async_trait::async_trait;
use eyre::Result;
use prospect_core::config::{Credentials, ProviderEndpoints};
use prospect_core::tools::{ToolRegistry, ToolServices};
use prospect_tools::ToolSchema;

use super::Command;

/// Prints every tool's name, description and input schema.
pub struct ToolsCommand;

fn catalogue() -> Vec<ToolSchema> {
    // Schemas do not depend on credentials, so none are loaded here.
    ToolRegistry::with_default_tools(
        &ProviderEndpoints::default(),
        ToolServices::with_reqwest(Credentials::new()),
    )
    .schemas()
}

#[async_trait]
impl Command for ToolsCommand {
    async fn execute(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&catalogue())?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
        Ok(())
    }
}
