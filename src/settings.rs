//! UI Settings
//!
//! Persisted presentation settings for the local part implementations, stored
//! as TOML in the platform config directory. Installed as a gpui global at
//! startup; parts fall back to defaults when the global is absent.

use std::path::PathBuf;

use gpui::{App, Global};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Shared theme settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Corner radius in pixels
    pub radius: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { radius: 6.0 }
    }
}

/// Checkbox presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxSettings {
    /// Box edge length in pixels
    pub size: f32,
}

impl Default for CheckboxSettings {
    fn default() -> Self {
        Self { size: 16.0 }
    }
}

/// Dialog presentation and dismissal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// Backdrop opacity, 0..=1
    pub overlay_opacity: f32,
    /// Maximum content width in pixels
    pub content_max_width: f32,
    /// Clicking the backdrop closes the dialog
    pub dismiss_on_overlay_click: bool,
    /// Render the corner close button inside content
    pub show_close_button: bool,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            overlay_opacity: 0.8,
            content_max_width: 512.0,
            dismiss_on_overlay_click: true,
            show_close_button: true,
        }
    }
}

/// All UI settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: ThemeSettings,
    pub checkbox: CheckboxSettings,
    pub dialog: DialogSettings,
}

impl Global for UiSettings {}

fn get_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

impl UiSettings {
    /// Parse settings from TOML. Empty input yields defaults.
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = toml::from_str(value)?;
        Ok(settings.normalized())
    }

    /// Load settings from the config file, defaults when it does not exist
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        if !path.exists() {
            info!(path = ?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
        })
    }

    /// Write settings to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_settings_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(&path, value)?;
        info!(path = ?path, "Settings saved");
        Ok(())
    }

    /// Clamp out-of-range values
    pub fn normalized(mut self) -> Self {
        self.theme.radius = self.theme.radius.max(0.0);
        self.checkbox.size = self.checkbox.size.max(8.0);
        self.dialog.overlay_opacity = self.dialog.overlay_opacity.clamp(0.0, 1.0);
        self.dialog.content_max_width = self.dialog.content_max_width.max(160.0);
        self
    }

    /// Settings installed on the app, or defaults
    pub fn global(cx: &App) -> Self {
        cx.try_global::<Self>().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = UiSettings::from_toml("  \n").expect("empty settings should parse");
        assert_eq!(settings, UiSettings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = UiSettings::from_toml(
            r#"
            [dialog]
            show_close_button = false
            "#,
        )
        .expect("partial settings should parse");

        assert!(!settings.dialog.show_close_button);
        assert!(settings.dialog.dismiss_on_overlay_click);
        assert_eq!(settings.dialog.content_max_width, 512.0);
        assert_eq!(settings.checkbox, CheckboxSettings::default());
        assert_eq!(settings.theme, ThemeSettings::default());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings = UiSettings::from_toml(
            r#"
            [theme]
            radius = -4.0

            [checkbox]
            size = 2.0

            [dialog]
            overlay_opacity = 3.5
            content_max_width = 10.0
            "#,
        )
        .expect("settings should parse");

        assert_eq!(settings.theme.radius, 0.0);
        assert_eq!(settings.checkbox.size, 8.0);
        assert_eq!(settings.dialog.overlay_opacity, 1.0);
        assert_eq!(settings.dialog.content_max_width, 160.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = UiSettings::from_toml("[dialog\nshow_close_button = ");
        assert!(matches!(err, Err(crate::error::Error::TomlDe { .. })));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = UiSettings::from_toml("[checkbox]\nsize = \"large\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_serialized_settings_parse_back() {
        let mut settings = UiSettings::default();
        settings.dialog.overlay_opacity = 0.5;
        settings.theme.radius = 10.0;

        let value = toml::to_string(&settings).expect("settings should serialize");
        let parsed = UiSettings::from_toml(&value).expect("settings should parse");
        assert_eq!(parsed, settings);
    }
}
