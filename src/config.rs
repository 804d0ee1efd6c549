//! Static bot settings loaded from a JSON file at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default location of the config file, relative to the working directory
pub const CONFIG_PATH: &str = "config.json";

/// Settings that shape the DJ module. Immutable after load.
///
/// `max_queue_size` and `allowed_sources` are carried in the config file
/// but not consulted when queueing; see DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BotConfig {
    pub max_queue_size: usize,
    pub auto_disconnect_minutes: u64,
    pub allowed_sources: HashSet<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            max_queue_size: 50,
            auto_disconnect_minutes: 5,
            allowed_sources: HashSet::from(["youtube".to_string()]),
        }
    }
}

impl BotConfig {
    /// Parse a config from raw JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load the config from `path`, falling back to defaults if the file is
/// missing or unparseable.
pub fn load(path: &Path) -> BotConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match BotConfig::from_json(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!("Error parsing config {}: {}. Using defaults.", path.display(), e);
                BotConfig::default()
            }
        },
        Err(e) => {
            warn!("Error loading config {}: {}. Using defaults.", path.display(), e);
            BotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_fallback_values() {
        let config = BotConfig::default();
        assert_eq!(config.max_queue_size, 50);
        assert_eq!(config.auto_disconnect_minutes, 5);
        assert!(config.allowed_sources.contains("youtube"));
        assert_eq!(config.allowed_sources.len(), 1);
    }

    #[test]
    fn parses_full_config() {
        let config = BotConfig::from_json(
            r#"{"max_queue_size": 10, "auto_disconnect_minutes": 2, "allowed_sources": ["youtube", "soundcloud"]}"#,
        )
        .unwrap();
        assert_eq!(config.max_queue_size, 10);
        assert_eq!(config.auto_disconnect_minutes, 2);
        assert_eq!(config.allowed_sources.len(), 2);
    }

    #[test]
    fn missing_keys_fall_back_per_field() {
        let config = BotConfig::from_json(r#"{"max_queue_size": 3}"#).unwrap();
        assert_eq!(config.max_queue_size, 3);
        assert_eq!(config.auto_disconnect_minutes, 5);
        assert!(config.allowed_sources.contains("youtube"));
    }

    #[test]
    fn corrupt_json_is_an_error() {
        assert!(BotConfig::from_json("{not json").is_err());
    }

    #[test]
    fn load_falls_back_when_file_is_missing() {
        let config = load(Path::new("definitely/not/a/config.json"));
        assert_eq!(config, BotConfig::default());
    }
}
