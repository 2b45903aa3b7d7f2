//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/dashboard-ui/` or `$XDG_CONFIG_HOME/dashboard-ui/`
/// - **macOS**: `~/Library/Application Support/dev.tunnel.dashboard-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\tunnel\dashboard-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "tunnel", "dashboard-ui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
