//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Initial window geometry
    pub window: WindowSettings,
    /// Emulated device metrics
    pub device: DeviceSettings,
    /// Optional cover image for the current track
    pub artwork_path: Option<PathBuf>,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Skip sheet animations
    pub reduce_motion: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
        }
    }
}

/// Window size on startup, in logical units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

/// Screen corner radius and safe-area insets of the emulated phone
///
/// A desktop window has neither, so they come from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    /// `None` means the display has square corners
    pub corner_radius: Option<f32>,
    pub safe_area_top: f32,
    pub safe_area_bottom: f32,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            corner_radius: Some(47.33),
            safe_area_top: 47.0,
            safe_area_bottom: 34.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "miniplayer", "MiniPlayer")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("No config directory available, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!("Settings not readable ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Settings error type
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("miniplayer-settings-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn defaults_describe_a_phone() {
        let settings = Settings::default();
        assert!(settings.display.dark_mode);
        assert!(!settings.display.reduce_motion);
        assert_eq!(settings.window.width, 390.0);
        assert_eq!(settings.window.height, 844.0);
        assert_eq!(settings.device.corner_radius, Some(47.33));
        assert!(settings.artwork_path.is_none());
    }

    #[test]
    fn round_trips_through_file() {
        let path = scratch_file("round_trip.json");
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        settings.device.corner_radius = None;
        settings.artwork_path = Some(PathBuf::from("/tmp/cover.png"));

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let parsed: Settings =
            serde_json::from_str(r#"{ "display": { "reduce_motion": true } }"#).unwrap();
        assert!(parsed.display.reduce_motion);
        assert!(parsed.display.dark_mode, "unset field should keep its default");
        assert_eq!(parsed.window, WindowSettings::default());
        assert_eq!(parsed.device, DeviceSettings::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed: Settings =
            serde_json::from_str(r#"{ "volume": 0.5, "window": { "width": 430.0 } }"#).unwrap();
        assert_eq!(parsed.window.width, 430.0);
        assert_eq!(parsed.window.height, 844.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load_from_file(&scratch_file("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = scratch_file("malformed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));

        let _ = std::fs::remove_file(&path);
    }
}
