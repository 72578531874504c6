use crate::logging;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level guide configuration, read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuideConfig {
    pub thinking_delay: ThinkingDelay,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    /// Catalog URL overrides keyed by test id ("mbti", "multi-iq", "htp", "smartphone").
    pub test_urls: BTreeMap<String, String>,
}

/// Artificial "thinking" latency before each bot reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThinkingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Start in dark mode.
    pub dark_mode: bool,
    /// Viewports at least this wide start with the sidebar open.
    pub sidebar_breakpoint: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for daily log files. Console only when unset.
    pub dir: Option<PathBuf>,
    pub retention_days: i64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            thinking_delay: ThinkingDelay::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            test_urls: BTreeMap::new(),
        }
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self {
            min_ms: 300,
            max_ms: 800,
        }
    }
}

impl ThinkingDelay {
    pub const NONE: ThinkingDelay = ThinkingDelay { min_ms: 0, max_ms: 0 };

    /// Inclusive bounds, swapped if given backwards.
    pub fn bounds(&self) -> (Duration, Duration) {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        (Duration::from_millis(lo), Duration::from_millis(hi))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sidebar_breakpoint: 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            retention_days: 7,
        }
    }
}

impl GuideConfig {
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unparseable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            logging::log_config(&format!("No config file at {} - using defaults", path.display()));
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                logging::log_config(&format!("Loaded config from {}", path.display()));
                config
            }
            Err(e) => {
                logging::log_error(
                    None,
                    &format!("Failed to parse config at {}: {} - using defaults", path.display(), e),
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuideConfig::default();
        assert_eq!(config.thinking_delay.min_ms, 300);
        assert_eq!(config.thinking_delay.max_ms, 800);
        assert!(config.ui.dark_mode);
        assert_eq!(config.ui.sidebar_breakpoint, 1024);
        assert!(config.logging.dir.is_none());
        assert_eq!(config.logging.retention_days, 7);
        assert!(config.test_urls.is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GuideConfig::from_json(
            r#"{"thinking_delay": {"max_ms": 50}, "test_urls": {"mbti": "https://example.org"}}"#,
        )
        .unwrap();

        assert_eq!(config.thinking_delay.min_ms, 300);
        assert_eq!(config.thinking_delay.max_ms, 50);
        assert!(config.ui.dark_mode);
        assert_eq!(config.test_urls.get("mbti").map(String::as_str), Some("https://example.org"));
    }

    #[test]
    fn test_delay_bounds_are_ordered() {
        let delay = ThinkingDelay { min_ms: 800, max_ms: 300 };
        let (lo, hi) = delay.bounds();
        assert_eq!(lo, Duration::from_millis(300));
        assert_eq!(hi, Duration::from_millis(800));
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig::load_or_default(&dir.path().join("missing.json"));
        assert_eq!(config, GuideConfig::default());
    }

    #[test]
    fn test_config_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(GuideConfig::load(&path).is_err());
        assert_eq!(GuideConfig::load_or_default(&path), GuideConfig::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ui": {"dark_mode": false}}"#).unwrap();

        let config = GuideConfig::load(&path).unwrap();

        assert!(!config.ui.dark_mode);
        assert_eq!(config.ui.sidebar_breakpoint, 1024);
    }
}
