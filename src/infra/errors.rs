// src/infra/errors.rs — Error types for gridboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridboardError {
    // User input
    #[error("Unknown widget type '{0}' (expected chart, task-list or info-panel)")]
    UnknownWidgetType(String),

    #[error("Unknown snapshot format '{0}' (expected text or json)")]
    UnknownFormat(String),

    #[error("Snapshot size {width}x{height} is too small (minimum {min_width}x{min_height})")]
    ViewportTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    // Infra
    #[error("Configuration error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridboardError {
    /// Errors caused by what the user typed, as opposed to the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            GridboardError::UnknownWidgetType(_)
                | GridboardError::UnknownFormat(_)
                | GridboardError::ViewportTooSmall { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GridboardError>;
