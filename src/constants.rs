//! UI Constants
//!
//! Centralized constants for the showcase window and settings storage.

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "dashboard-ui.toml";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Showcase title
pub const WINDOW_TITLE: &str = "Dashboard UI";
