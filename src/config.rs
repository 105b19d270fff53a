use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Settings for local invocations of the hook.
///
/// The default document itself is fixed and not part of this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvokeConfig {
    /// Pretty-print the returned request record
    #[serde(default)]
    pub pretty: bool,
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for InvokeConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            log: default_log(),
        }
    }
}

impl InvokeConfig {
    /// Loads settings from an optional YAML file, then `ORIGIN_REWRITE_*` variables
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.display().to_string();
        let config = Config::builder()
            .add_source(File::with_name(&path_str).required(false))
            .add_source(Environment::with_prefix("ORIGIN_REWRITE"))
            .build()
            .with_context(|| format!("Failed to load config from: {}", path_str))?;

        config
            .try_deserialize()
            .with_context(|| format!("Failed to parse config from: {}", path_str))
    }
}
