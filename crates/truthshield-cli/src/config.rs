//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use truthshield_engine::EngineConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine configuration (timeouts, model, heuristic table)
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file, or use defaults when the file
    /// does not exist. A missing config file is the normal case for the
    /// offline mode.
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}
