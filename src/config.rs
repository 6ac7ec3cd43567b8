//! Application configuration
//!
//! Loaded from a JSON file. Every field has a default, so a partial file
//! (or no file at all) is valid.

use crate::error::{Result, UserSearchError};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "usersearch.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Minimum level written to the log file
    pub log_level: LogLevel,
    /// Log file location (default: next to the executable)
    pub log_file: Option<PathBuf>,
    /// TUI event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Initial GUI window width
    pub window_width: f32,
    /// Initial GUI window height
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_file: None,
            tick_rate_ms: 50,
            window_width: 640.0,
            window_height: 360.0,
        }
    }
}

impl AppConfig {
    /// Default config path (same directory as executable)
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
            .map_err(|e| UserSearchError::ConfigParse(path.display().to_string(), e))
    }

    fn from_json(contents: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
