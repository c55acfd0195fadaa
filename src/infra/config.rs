// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::{GridboardError, Result};
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Start with the two demo widgets (a chart and a task list).
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
    /// Fixed seed for chart values. Unset means OS entropy.
    #[serde(default)]
    pub chart_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            seed_defaults: true,
            chart_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Terminal width (columns) at which the grid switches to two columns.
    pub medium_width: u16,
    /// Terminal width at which the grid uses `max_columns`.
    pub wide_width: u16,
    pub max_columns: u16,
    pub poll_interval_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            medium_width: 80,
            wide_width: 120,
            max_columns: 3,
            poll_interval_ms: 250,
        }
    }
}

impl LayoutConfig {
    /// Number of grid columns for a given terminal width.
    pub fn columns_for(&self, width: u16) -> u16 {
        let max = self.max_columns.clamp(1, 3);
        if width < self.medium_width {
            1
        } else if width < self.wide_width {
            max.min(2)
        } else {
            max
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file for interactive sessions; defaults to the data dir.
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_title() -> String {
    "Dashboard".into()
}

fn default_level() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GridboardError::Config {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
    }
}
