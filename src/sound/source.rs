//! Sound source selection.
//!
//! The completion chime is either the built-in chime or a user supplied
//! audio file.

use std::path::{Path, PathBuf};

use crate::types::SoundSetting;

use super::error::SoundError;

/// Name of the built-in chime.
pub const DEFAULT_CHIME_NAME: &str = "chime";

/// Audio file extensions rodio can decode with default features.
const SUPPORTED_EXTENSIONS: &[&str] = &["wav", "mp3", "flac", "ogg"];

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk.
    File {
        /// Display name (the file stem)
        name: String,
        /// Full path to the file
        path: PathBuf,
    },
    /// The chime built into the binary.
    Embedded {
        /// Name of the embedded sound
        name: String,
    },
}

impl SoundSource {
    /// Creates a file source without validation.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a file source, checking that the file exists and has a
    /// supported extension.
    ///
    /// # Errors
    ///
    /// `FileNotFound` for a missing file, `UnsupportedFormat` for an unknown
    /// extension.
    pub fn file_validated(path: impl AsRef<Path>) -> Result<Self, SoundError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SoundError::FileNotFound(path.display().to_string()));
        }

        let supported = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(SoundError::UnsupportedFormat(path.display().to_string()));
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CHIME_NAME.to_string());

        Ok(Self::file(name, path))
    }

    /// Creates an embedded sound source.
    #[must_use]
    pub fn embedded(name: impl Into<String>) -> Self {
        Self::Embedded { name: name.into() }
    }

    /// Returns the name of the sound source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Embedded { name } => name,
        }
    }

    /// Returns true if this is a file source.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Returns true if this is the embedded chime.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded { .. })
    }

    /// Returns the file path for file sources.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Embedded { .. } => None,
        }
    }
}

/// Returns the built-in chime.
#[must_use]
pub fn get_default_sound() -> SoundSource {
    SoundSource::embedded(DEFAULT_CHIME_NAME)
}

/// Resolves the configured sound setting.
///
/// Returns `None` when sound is disabled. An unusable file falls back to the
/// built-in chime with a warning.
#[must_use]
pub fn resolve_sound(setting: &SoundSetting) -> Option<SoundSource> {
    match setting {
        SoundSetting::Disabled => None,
        SoundSetting::Default => Some(get_default_sound()),
        SoundSetting::File(path) => match SoundSource::file_validated(path) {
            Ok(source) => Some(source),
            Err(e) => {
                tracing::warn!(error = %e, "内蔵チャイムを使用します");
                Some(get_default_sound())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_source_file() {
        let source = SoundSource::file("bell", "/sounds/bell.wav");
        assert!(source.is_file());
        assert!(!source.is_embedded());
        assert_eq!(source.name(), "bell");
        assert_eq!(source.path(), Some(Path::new("/sounds/bell.wav")));
    }

    #[test]
    fn test_sound_source_embedded() {
        let source = SoundSource::embedded("chime");
        assert!(source.is_embedded());
        assert_eq!(source.name(), "chime");
        assert!(source.path().is_none());
    }

    #[test]
    fn test_file_validated_missing() {
        let result = SoundSource::file_validated("/nonexistent/bell.wav");
        assert!(matches!(result, Err(SoundError::FileNotFound(_))));
    }

    #[test]
    fn test_file_validated_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let result = SoundSource::file_validated(file.path());
        assert!(matches!(result, Err(SoundError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_file_validated_uses_stem_as_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Bell.MP3");
        std::fs::write(&path, b"").unwrap();

        let source = SoundSource::file_validated(&path).unwrap();
        assert_eq!(source.name(), "Bell");
        assert_eq!(source.path(), Some(path.as_path()));
    }

    #[test]
    fn test_resolve_sound() {
        assert_eq!(resolve_sound(&SoundSetting::Disabled), None);
        assert_eq!(
            resolve_sound(&SoundSetting::Default),
            Some(get_default_sound())
        );
        assert_eq!(
            resolve_sound(&SoundSetting::File("/nonexistent.wav".into())),
            Some(get_default_sound())
        );
    }
}
