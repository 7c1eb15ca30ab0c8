//! Runtime configuration.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. Optional `config.toml` (see [`DoremeConfig::load_file`])
//! 3. Environment variables (`DOREME_SERPAPI_KEY` / `SERPAPI_KEY`, `DOREME_DATA_DIR`)
//!
//! A missing search credential is a supported configuration: it selects the
//! static fallback feed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DoremeError, Result};

/// Environment variable holding the SerpAPI credential.
pub const ENV_SERPAPI_KEY: &str = "DOREME_SERPAPI_KEY";
/// Alternate, unprefixed credential variable.
pub const ENV_SERPAPI_KEY_FALLBACK: &str = "SERPAPI_KEY";
/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "DOREME_DATA_DIR";

/// Directory name below the platform data dir.
pub const APP_DIR_NAME: &str = "doreme";

fn default_search_delay_ms() -> u64 {
    800
}

fn default_reply_delay_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoremeConfig {
    /// SerpAPI credential. `None` selects the static feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serpapi_key: Option<String>,

    /// Directory holding the persisted namespaces. `None` means the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Simulated latency of the static feed provider.
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Delay before a simulated counterpart reply.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for DoremeConfig {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            data_dir: None,
            search_delay_ms: default_search_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl DoremeConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Loads a TOML config file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| DoremeError::config(format!("{}: {}", path.display(), e)))?;
        config.serpapi_key = normalize_key(config.serpapi_key);
        Ok(config)
    }

    /// Loads `path` (if given) and then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = normalize_key(lookup(ENV_SERPAPI_KEY))
            .or_else(|| normalize_key(lookup(ENV_SERPAPI_KEY_FALLBACK)));
        if key.is_some() {
            self.serpapi_key = key;
        }

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn has_search_credential(&self) -> bool {
        self.serpapi_key.is_some()
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Blank credentials count as absent.
fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = DoremeConfig::default();
        assert!(!config.has_search_credential());
        assert_eq!(config.search_delay(), Duration::from_millis(800));
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[(ENV_SERPAPI_KEY, "abc"), (ENV_DATA_DIR, "/tmp/doreme")]);
        let mut config = DoremeConfig::default();
        config.apply_env(|k| vars.get(k).cloned());

        assert_eq!(config.serpapi_key.as_deref(), Some("abc"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/doreme")));
    }

    #[test]
    fn test_blank_key_is_absent() {
        let vars = env(&[(ENV_SERPAPI_KEY, "   ")]);
        let mut config = DoremeConfig::default();
        config.apply_env(|k| vars.get(k).cloned());
        assert!(!config.has_search_credential());
    }

    #[test]
    fn test_fallback_key_variable() {
        let vars = env(&[(ENV_SERPAPI_KEY_FALLBACK, "xyz")]);
        let mut config = DoremeConfig::default();
        config.apply_env(|k| vars.get(k).cloned());
        assert_eq!(config.serpapi_key.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "search_delay_ms = 10\nserpapi_key = \"\"\n").unwrap();

        let config = DoremeConfig::load_file(&path).unwrap();
        assert_eq!(config.search_delay_ms, 10);
        assert_eq!(config.reply_delay_ms, 1500);
        assert!(config.serpapi_key.is_none());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = DoremeConfig::load_file(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, DoremeConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "search_delay_ms = \"soon\"").unwrap();
        let err = DoremeConfig::load_file(&path).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("config.toml"));
    }
}
