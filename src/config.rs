//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/statement-grid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::{GridMetrics, IngestLayout};
use crate::model::history::{DEFAULT_MAX_HISTORY, MIN_MAX_HISTORY};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of table snapshots kept for undo
    #[serde(default = "default_max_history")]
    pub max_history_size: usize,
    /// Where the statement keeps its headers, key and amount columns
    #[serde(default)]
    pub layout: IngestLayout,
    /// Pixel metrics used for windowing
    #[serde(default)]
    pub metrics: GridMetrics,
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_history_size: default_max_history(),
            layout: IngestLayout::default(),
            metrics: GridMetrics::default(),
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<GridConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.normalized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn normalized(mut self) -> Self {
        if self.max_history_size < MIN_MAX_HISTORY {
            tracing::warn!(
                "max_history_size {} too small, using {}",
                self.max_history_size,
                MIN_MAX_HISTORY
            );
            self.max_history_size = MIN_MAX_HISTORY;
        }
        self
    }
}
