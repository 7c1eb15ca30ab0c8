//! Path management for DoReMe storage files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/doreme/           # Data directory (platform default)
//! ├── config.toml                  # Optional configuration
//! ├── doreme_conversations.json    # Conversation list
//! ├── doreme_projects.json         # Project list
//! ├── doreme_matches.json          # Decision map
//! └── doreme_onboarded.json        # Onboarding flag
//! ```

use std::path::{Path, PathBuf};

use doreme_core::config::{APP_DIR_NAME, DoremeConfig};
use doreme_core::store::StorageKey;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No data directory could be determined for this platform/user.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DataDirNotFound => write!(f, "Cannot determine data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved storage locations rooted at one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoremePaths {
    base_dir: PathBuf,
}

impl DoremePaths {
    /// Uses `base_dir` when given, otherwise the platform data directory.
    pub fn new(base_dir: Option<&Path>) -> Result<Self, PathError> {
        let base_dir = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => Self::default_data_dir()?,
        };
        Ok(Self { base_dir })
    }

    /// Roots every file at `base_dir`.
    pub fn at(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolves the base directory from configuration.
    pub fn from_config(config: &DoremeConfig) -> Result<Self, PathError> {
        Self::new(config.data_dir.as_deref())
    }

    /// `<platform data dir>/doreme`
    pub fn default_data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File backing a storage namespace: `<base>/<key>.json`.
    pub fn namespace_file(&self, key: StorageKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", key.as_str()))
    }

    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }
}
