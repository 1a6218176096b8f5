use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3030/";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Term-lookup service queried with the raw search text
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let endpoint = env::var("BEGREB_ENDPOINT").unwrap_or_else(|_| default_endpoint());

        Self { endpoint }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}
