//! Field configuration persistence
//!
//! Stores defaults for new fields in `~/.config/linefield/config.yaml`

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editable::{DEFAULT_HISTORY_DEPTH, DEFAULT_MAX_LENGTH};

/// Errors from reading or writing a config file
#[derive(Debug)]
pub enum ConfigError {
    /// No config directory could be resolved for this platform
    NoConfigDir,
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_yaml::Error },
    Serialize(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path.display(), source)
            }
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoConfigDir => None,
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

/// Defaults applied to every field built with `TextField::from_config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Maximum content length in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Undo steps kept per field
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    /// Minimum time between drag auto-scroll steps
    #[serde(default = "default_drag_scroll_interval_ms")]
    pub drag_scroll_interval_ms: u64,

    /// Inset the text area by 4px on each side
    #[serde(default = "default_draw_background")]
    pub draw_background: bool,

    /// Advance used by the monospace fallback measure
    #[serde(default = "default_char_width")]
    pub char_width: f32,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_drag_scroll_interval_ms() -> u64 {
    40
}

fn default_draw_background() -> bool {
    true
}

fn default_char_width() -> f32 {
    6.0
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            history_depth: default_history_depth(),
            drag_scroll_interval_ms: default_drag_scroll_interval_ms(),
            draw_background: default_draw_background(),
            char_width: default_char_width(),
        }
    }
}

impl FieldConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default config file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
