use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::search::SearchConfig;
use self::ui::UiConfig;

pub mod network;
pub mod search;
pub mod ui;

pub use search::ResponseOrdering;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid response ordering: {0} (expected last-resolved or latest-issued)")]
    InvalidOrdering(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with `BEGREB_*` environment overrides applied
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            search: SearchConfig::new(),
            ui: UiConfig::new(),
        }
    }

    /// Load a JSON profile; absent keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }
}
