use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_DEBOUNCE_MS: u64 = 70;
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_min_query_len() -> usize {
    DEFAULT_MIN_QUERY_LEN
}

/// Which response wins when requests overlap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// The response that resolves last is rendered, even if it was issued earlier
    #[default]
    LastResolved,
    /// Responses to anything but the most recently issued request are dropped
    LatestIssued,
}

impl FromStr for ResponseOrdering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "last-resolved" => Ok(Self::LastResolved),
            "latest-issued" => Ok(Self::LatestIssued),
            other => Err(ConfigError::InvalidOrdering(other.to_string())),
        }
    }
}

impl fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastResolved => f.write_str("last-resolved"),
            Self::LatestIssued => f.write_str("latest-issued"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a query is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Shorter queries are ignored
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default)]
    pub ordering: ResponseOrdering,
}

impl SearchConfig {
    pub fn new() -> Self {
        let debounce_ms = env::var("BEGREB_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        let min_query_len = env::var("BEGREB_MIN_QUERY_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_QUERY_LEN);

        let ordering = match env::var("BEGREB_ORDERING") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}, falling back to last-resolved");
                ResponseOrdering::LastResolved
            }),
            Err(_) => ResponseOrdering::LastResolved,
        };

        Self {
            debounce_ms,
            min_query_len,
            ordering,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            ordering: ResponseOrdering::default(),
        }
    }
}
