use anyhow::Result;
use clap::ValueEnum;
use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
}

/// Defaults for the driver, overridable through `BOOKMARK_MINER_*` env vars
/// and then by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub buildable_only: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_source(Environment::with_prefix("BOOKMARK_MINER").try_parsing(true))
    }

    fn from_source(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("format", "markdown")?
            .set_default("buildable_only", false)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
