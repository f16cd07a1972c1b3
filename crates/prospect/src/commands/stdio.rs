use async_trait::async_trait;
use eyre::{Result, eyre};
use prospect_core::mcp::serve_stdio;

use super::{Command, server_from_env};

pub struct StdioCommand;

#[async_trait]
impl Command for StdioCommand {
    async fn execute(&self) -> Result<()> {
        serve_stdio(server_from_env())
            .await
            .map_err(|e| eyre!("stdio session failed: {}", e))
    }
}
