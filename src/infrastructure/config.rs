//! Process configuration.
//!
//! Loaded from environment variables with fallback to defaults. Only the
//! shell around the stores is configurable; theme and feed behaviour is fixed.

use super::catalog::DEFAULT_CATALOG_URL;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Endpoint returning the product array
    pub catalog_url: String,

    /// JSON file holding the persisted theme
    pub preferences_path: PathBuf,

    /// Log destination; stdout belongs to the terminal UI
    pub log_file: PathBuf,

    /// `EnvFilter` directive string
    pub log_filter: String,

    /// Longest the event loop sleeps waiting for input
    pub tick_rate: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tick_ms: u64 = lookup("THEMEMORPH_TICK_MS")
            .unwrap_or_else(|| "100".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("THEMEMORPH_TICK_MS".to_string()))?;
        if tick_ms == 0 {
            return Err(ConfigError::InvalidValue("THEMEMORPH_TICK_MS".to_string()));
        }

        let catalog_url = lookup("THEMEMORPH_CATALOG_URL")
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("THEMEMORPH_CATALOG_URL".to_string()));
        }

        Ok(AppConfig {
            catalog_url,
            preferences_path: lookup("THEMEMORPH_PREFERENCES")
                .map(PathBuf::from)
                .unwrap_or_else(default_preferences_path),
            log_file: lookup("THEMEMORPH_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("thememorph.log")),
            log_filter: lookup("THEMEMORPH_LOG").unwrap_or_else(|| "info".to_string()),
            tick_rate: Duration::from_millis(tick_ms),
        })
    }
}

fn default_preferences_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".thememorph"))
        .unwrap_or_else(|| PathBuf::from(".thememorph"))
        .join("preferences.json")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert!(config.preferences_path.ends_with(".thememorph/preferences.json"));
        assert!(config.log_file.ends_with("thememorph.log"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("THEMEMORPH_CATALOG_URL", "http://localhost:8080/products"),
            ("THEMEMORPH_PREFERENCES", "/tmp/prefs.json"),
            ("THEMEMORPH_LOG", "thememorph=debug"),
            ("THEMEMORPH_TICK_MS", "40"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_url, "http://localhost:8080/products");
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.log_filter, "thememorph=debug");
        assert_eq!(config.tick_rate, Duration::from_millis(40));
    }

    #[test]
    fn test_invalid_tick_rate() {
        for bad in ["fast", "0", "-5"] {
            let err = AppConfig::from_lookup(lookup_from(&[("THEMEMORPH_TICK_MS", bad)])).unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for THEMEMORPH_TICK_MS");
        }
    }

    #[test]
    fn test_invalid_catalog_url() {
        let result = AppConfig::from_lookup(lookup_from(&[("THEMEMORPH_CATALOG_URL", "ftp://x")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
