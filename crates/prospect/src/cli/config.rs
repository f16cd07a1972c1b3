use dotenvy::dotenv;
use eyre::Result;

/// Loads `.env` from the working directory or its parents, if present.
/// Variables already set in the environment win.
pub fn load_env() -> Result<()> {
    dotenv().ok();
    Ok(())
}
