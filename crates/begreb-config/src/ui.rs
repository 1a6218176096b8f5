use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_tick_ms() -> u64 {
    16
}

fn default_title() -> String {
    "Begreb".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How often the window drains backend events
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_title")]
    pub title: String,
}

impl UiConfig {
    /// Drain interval; a zero `tick_ms` is treated as one millisecond
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn new() -> Self {
        let tick_ms = env::var("BEGREB_TICK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_tick_ms);

        Self {
            tick_ms,
            title: default_title(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            title: default_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env::with_vars;

    #[test]
    fn tick_comes_from_env() {
        let config = with_vars(&[("BEGREB_TICK_MS", "40")], UiConfig::new);
        assert_eq!(config.tick_ms, 40);
        assert_eq!(config.tick(), Duration::from_millis(40));
    }

    #[test]
    fn bad_tick_falls_back_to_default() {
        let config = with_vars(&[("BEGREB_TICK_MS", "soon")], UiConfig::new);
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn zero_tick_is_clamped() {
        let config = UiConfig {
            tick_ms: 0,
            ..UiConfig::default()
        };
        assert_eq!(config.tick(), Duration::from_millis(1));
    }
}
