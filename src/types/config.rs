//! Application configuration.
//!
//! Presets are fixed; only the ambient behavior (completion sound, tray) is
//! configurable. Configuration is assembled from command line flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured sound file does not exist.
    #[error("サウンドファイルが見つかりません: {}", .0.display())]
    SoundFileNotFound(PathBuf),

    /// The configured sound path is not a regular file.
    #[error("サウンドファイルではありません: {}", .0.display())]
    SoundPathNotFile(PathBuf),
}

/// Which chime to play when a countdown completes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum SoundSetting {
    /// No sound at all
    Disabled,
    /// The built-in chime
    #[default]
    Default,
    /// A user supplied audio file
    File(PathBuf),
}

/// Runtime configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Completion chime
    #[serde(default)]
    pub sound: SoundSetting,
    /// Whether to create the tray icon
    #[serde(default = "default_tray_enabled")]
    pub tray_enabled: bool,
}

fn default_tray_enabled() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sound: SoundSetting::Default,
            tray_enabled: default_tray_enabled(),
        }
    }
}

impl AppConfig {
    /// Disables the completion chime.
    #[must_use]
    pub fn without_sound(mut self) -> Self {
        self.sound = SoundSetting::Disabled;
        self
    }

    /// Uses the given audio file as the completion chime.
    #[must_use]
    pub fn with_sound_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sound = SoundSetting::File(path.into());
        self
    }

    /// Disables the tray icon.
    #[must_use]
    pub fn without_tray(mut self) -> Self {
        self.tray_enabled = false;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let SoundSetting::File(path) = &self.sound {
            if !path.exists() {
                return Err(ConfigError::SoundFileNotFound(path.clone()));
            }
            if !path.is_file() {
                return Err(ConfigError::SoundPathNotFile(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.sound, SoundSetting::Default);
        assert!(config.tray_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AppConfig::default().without_sound().without_tray();
        assert_eq!(config.sound, SoundSetting::Disabled);
        assert!(!config.tray_enabled);
    }

    #[test]
    fn test_validate_missing_sound_file() {
        let config = AppConfig::default().with_sound_file("/nonexistent/chime.mp3");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::SoundFileNotFound(_)));
        assert!(err.to_string().contains("/nonexistent/chime.mp3"));
    }

    #[test]
    fn test_validate_directory_as_sound_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default().with_sound_file(dir.path());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SoundPathNotFile(_))
        ));
    }

    #[test]
    fn test_validate_existing_sound_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = AppConfig::default().with_sound_file(file.path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_serialize_sound_setting() {
        let json = serde_json::to_string(&SoundSetting::File("/tmp/a.wav".into())).unwrap();
        assert_eq!(json, r#"{"kind":"file","path":"/tmp/a.wav"}"#);

        let json = serde_json::to_string(&SoundSetting::Disabled).unwrap();
        assert_eq!(json, r#"{"kind":"disabled"}"#);
    }
}
