//! Sound system error types.
//!
//! Every error here is recoverable: a failed chime never affects the timer.

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no speakers connected).
    #[error("オーディオデバイスが利用できません: {0}")]
    DeviceNotAvailable(String),

    /// Sound file was not found at the specified path.
    #[error("サウンドファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// Sound file has an extension we cannot decode.
    #[error("対応していないサウンド形式です: {0}")]
    UnsupportedFormat(String),

    /// Failed to decode the audio file.
    #[error("サウンドファイルのデコードに失敗しました: {0}")]
    DecodeError(String),

    /// Failed to create the audio output stream.
    #[error("オーディオストリームの作成に失敗しました: {0}")]
    StreamError(String),

    /// Generic sound playback error.
    #[error("サウンド再生エラー: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }

    /// Returns true if this error is related to the audio file.
    #[must_use]
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound(_) | Self::UnsupportedFormat(_) | Self::DecodeError(_)
        )
    }

    /// Returns true if playback should fall back to the built-in chime.
    #[must_use]
    pub fn should_fallback_to_embedded(&self) -> bool {
        self.is_file_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SoundError::DeviceNotAvailable("no device".to_string());
        assert!(err.to_string().contains("no device"));
        assert!(err.to_string().contains("オーディオデバイスが利用できません"));

        let err = SoundError::FileNotFound("/path/to/chime.mp3".to_string());
        assert!(err.to_string().contains("/path/to/chime.mp3"));

        let err = SoundError::UnsupportedFormat("chime.xyz".to_string());
        assert!(err.to_string().contains("chime.xyz"));
    }

    #[test]
    fn test_is_device_error() {
        assert!(SoundError::DeviceNotAvailable("x".into()).is_device_error());
        assert!(SoundError::StreamError("x".into()).is_device_error());
        assert!(!SoundError::FileNotFound("x".into()).is_device_error());
        assert!(!SoundError::PlaybackError("x".into()).is_device_error());
    }

    #[test]
    fn test_file_errors_fall_back() {
        assert!(SoundError::FileNotFound("x".into()).should_fallback_to_embedded());
        assert!(SoundError::UnsupportedFormat("x".into()).should_fallback_to_embedded());
        assert!(SoundError::DecodeError("x".into()).should_fallback_to_embedded());
        assert!(!SoundError::StreamError("x".into()).should_fallback_to_embedded());
        assert!(!SoundError::DeviceNotAvailable("x".into()).should_fallback_to_embedded());
    }
}
