//! # Application Configuration
//!
//! Loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SWEETS_*`)
//! 2. Config file (`<config dir>/sweet-shop.toml`)
//! 3. Defaults (this file)
//!
//! ## Example `sweet-shop.toml`
//! ```toml
//! latency = "none"
//! seed_catalog = true
//! session_path = "/tmp/sweet-shop/session.json"
//! log_filter = "info,sweets=debug,sweet_shop_lib=debug"
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sweets_store::{FileSessionStorage, Latency};

use crate::error::{AppError, AppResult};

/// Default tracing filter when neither `SWEETS_LOG` nor the file sets one.
///
/// `sweets` covers `sweets_core` and `sweets_store`; the app logs under
/// `sweet_shop_lib`.
pub const DEFAULT_LOG_FILTER: &str = "info,sweets=debug,sweet_shop_lib=debug";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Session file location. `None` means the platform data directory.
    pub session_path: Option<PathBuf>,

    /// Simulated backend latency profile.
    pub latency: Latency,

    /// Start with the six demo sweets instead of an empty store.
    pub seed_catalog: bool,

    /// tracing-subscriber filter directive.
    pub log_filter: String,

    /// File the values were read from, if one existed.
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// `SWEETS_*` values that did not parse and were ignored.
    #[serde(skip)]
    pub rejected_overrides: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            session_path: None,
            latency: Latency::Demo,
            seed_catalog: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            source: None,
            rejected_overrides: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a file (or the default path), then applies
    /// environment overrides and validates.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// Runs before tracing is up, so nothing is logged here. The caller
    /// reports [`source`](Self::source) and
    /// [`rejected_overrides`](Self::rejected_overrides) once it is.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let path = config_path.or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    AppError::ConfigRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                let mut config: AppConfig =
                    toml::from_str(&contents).map_err(|source| AppError::ConfigParse {
                        path: path.clone(),
                        source,
                    })?;
                config.source = Some(path);
                config
            }
            _ => AppConfig::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(AppError::InvalidConfig("log_filter must not be empty".into()));
        }

        if let Some(path) = &self.session_path {
            if path.as_os_str().is_empty() {
                return Err(AppError::InvalidConfig(
                    "session_path must not be empty".into(),
                ));
            }
            if path.is_dir() {
                return Err(AppError::InvalidConfig(format!(
                    "session_path {:?} is a directory",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Applies `SWEETS_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("SWEETS_SESSION_PATH") {
            self.session_path = Some(PathBuf::from(path));
        }

        if let Some(latency) = lookup("SWEETS_LATENCY") {
            match latency.parse() {
                Ok(parsed) => self.latency = parsed,
                Err(e) => self
                    .rejected_overrides
                    .push(format!("SWEETS_LATENCY={}: {}", latency, e)),
            }
        }

        if let Some(seed) = lookup("SWEETS_SEED_CATALOG") {
            match seed.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => self.seed_catalog = true,
                "false" | "0" | "no" => self.seed_catalog = false,
                _ => self.rejected_overrides.push(format!(
                    "SWEETS_SEED_CATALOG={}: expected true or false",
                    seed
                )),
            }
        }

        if let Some(filter) = lookup("SWEETS_LOG") {
            self.log_filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "sweetshop", "sweet-shop")
            .map(|dirs| dirs.config_dir().join("sweet-shop.toml"))
    }

    /// The session file to use: configured path, else the platform default.
    pub fn resolved_session_path(&self) -> AppResult<PathBuf> {
        self.session_path
            .clone()
            .or_else(FileSessionStorage::default_path)
            .ok_or(AppError::NoSessionPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.latency, Latency::Demo);
        assert!(config.seed_catalog);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[
            ("SWEETS_SESSION_PATH", "/tmp/s.json"),
            ("SWEETS_LATENCY", "none"),
            ("SWEETS_SEED_CATALOG", "false"),
            ("SWEETS_LOG", "warn"),
        ]));

        assert_eq!(config.session_path, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(config.latency, Latency::None);
        assert!(!config.seed_catalog);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[
            ("SWEETS_LATENCY", "warp-speed"),
            ("SWEETS_SEED_CATALOG", "maybe"),
        ]));

        assert_eq!(config.latency, Latency::Demo);
        assert!(config.seed_catalog);
        assert_eq!(config.rejected_overrides.len(), 2);
        assert!(config.rejected_overrides[0].starts_with("SWEETS_LATENCY=warp-speed"));
        assert!(config.rejected_overrides[1].starts_with("SWEETS_SEED_CATALOG=maybe"));
    }

    #[test]
    fn test_default_filter_enables_every_crate() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        let directives: Vec<&str> = DEFAULT_LOG_FILTER.split(',').collect();
        assert!(directives.contains(&"sweets=debug"));
        assert!(directives.contains(&"sweet_shop_lib=debug"));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.log_filter = "  ".to_string();
        assert!(config.validate().is_err());

        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.session_path = Some(dir.path().to_path_buf());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("latency = \"none\"").unwrap();
        assert_eq!(config.latency, Latency::None);
        assert!(config.seed_catalog);
        assert_eq!(config.session_path, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweet-shop.toml");
        std::fs::write(&path, "seed_catalog = false\nlog_filter = \"debug\"\n").unwrap();

        let config = AppConfig::load(Some(path.clone())).unwrap();
        assert!(!config.seed_catalog);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn test_missing_file_has_no_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweet-shop.toml");
        std::fs::write(&path, "latency = [").unwrap();

        assert!(matches!(
            AppConfig::load(Some(path)),
            Err(AppError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            session_path: Some(PathBuf::from("/tmp/session.json")),
            latency: Latency::None,
            seed_catalog: false,
            log_filter: "debug".to_string(),
            ..AppConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
