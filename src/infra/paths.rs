// src/infra/paths.rs — Config and data directory resolution
//
// All paths respect the GRIDBOARD_HOME environment variable for isolation.
// When GRIDBOARD_HOME is set, config and logs live under that directory.
// When unset, config uses ~/.gridboard/ and data uses the platform data dir.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the GRIDBOARD_HOME override, if set.
fn gridboard_home() -> Option<PathBuf> {
    std::env::var_os("GRIDBOARD_HOME").map(PathBuf::from)
}

/// Configuration directory: $GRIDBOARD_HOME/ or ~/.gridboard/
pub fn config_dir() -> PathBuf {
    if let Some(home) = gridboard_home() {
        return home;
    }
    dirs_home().join(".gridboard")
}

/// Data directory: $GRIDBOARD_HOME/data/ or the platform local data dir.
pub fn data_dir() -> PathBuf {
    if let Some(home) = gridboard_home() {
        return home.join("data");
    }
    match ProjectDirs::from("", "", "gridboard") {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

/// Home directory, falling back to the working directory when it cannot be
/// determined (e.g. a stripped-down container with no passwd entry).
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default log file for interactive sessions
pub fn log_file_path() -> PathBuf {
    data_dir().join("gridboard.log")
}
