use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use super::error::AppError;
use super::theme::ThemeVariant;

/// Theme the editor starts with. The runtime selection itself is
/// process-lifetime only; this is just the startup default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn variant(self) -> ThemeVariant {
        match self {
            Self::Light => ThemeVariant::Light,
            Self::Dark => ThemeVariant::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: ThemePreference,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,
}

fn default_theme() -> ThemePreference {
    ThemePreference::Dark
}

fn default_word_wrap() -> bool {
    true
}

fn default_line_numbers() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            word_wrap_enabled: default_word_wrap(),
            line_numbers_enabled: default_line_numbers(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("quillpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert!(settings.word_wrap_enabled);
        assert!(settings.line_numbers_enabled);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"word_wrap_enabled": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.word_wrap_enabled); // Should use file value
        assert_eq!(settings.theme, ThemePreference::Dark); // Should use default
    }

    #[test]
    fn test_theme_preference_serialization() {
        let settings = AppSettings {
            theme: ThemePreference::Light,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Light\""));
    }

    #[test]
    fn test_theme_preference_maps_to_variant() {
        assert_eq!(ThemePreference::Dark.variant(), ThemeVariant::Dark);
        assert_eq!(ThemePreference::Light.variant(), ThemeVariant::Light);
    }
}
