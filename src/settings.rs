use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "RAISE_HAND";
pub const DEFAULT_SOURCE_DIR: &str = "notes";
pub const DEFAULT_OUTPUT_DIR: &str = "dashboard/data";
/// Team assigned to winners listed without a `TEAM -` prefix.
pub const DEFAULT_TEAM: &str = "UNKNOWN";

/// Run settings: built-in defaults, then `RAISE_HAND_*` env vars, then CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub default_team: String,
}

impl Settings {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as `from_env` but reads variables from `vars` instead of the process.
    #[cfg(test)]
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self> {
        let mut settings: Settings = Config::builder()
            .set_default("source_dir", DEFAULT_SOURCE_DIR)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("default_team", DEFAULT_TEAM)?
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .context("Invalid RAISE_HAND_* settings")?;
        settings.default_team = settings.default_team.trim().to_uppercase();
        if settings.default_team.is_empty() {
            settings.default_team = DEFAULT_TEAM.to_string();
        }
        Ok(settings)
    }

    /// Command-line values win over everything else.
    pub fn with_overrides(
        mut self,
        source_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        default_team: Option<String>,
    ) -> Self {
        if let Some(dir) = source_dir {
            self.source_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(team) = default_team.map(|t| t.trim().to_uppercase()) {
            if !team.is_empty() {
                self.default_team = team;
            }
        }
        self
    }
}
