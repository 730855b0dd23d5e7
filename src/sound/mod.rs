//! Sound playback for the completion chime.
//!
//! This module provides:
//!
//! - The built-in synthesized chime and user supplied audio files
//! - Non-blocking playback through rodio
//! - Fire-and-forget ringing that never affects the timer
//!
//! # Usage
//!
//! ```rust,no_run
//! use pomodoro_tray::sound::{get_default_sound, ring_completion, try_create_player};
//!
//! if let Some(player) = try_create_player() {
//!     ring_completion(&player, &get_default_sound());
//! }
//! ```

mod embedded;
mod error;
mod player;
mod source;

pub use embedded::{chime_duration, get_chime_notes, ChimeNote, CHIME_NOTES};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use source::{get_default_sound, resolve_sound, SoundSource, DEFAULT_CHIME_NAME};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Trait for sound playback implementations.
pub trait SoundPlayer {
    /// Plays a sound from the given source without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }
}

/// Rings the completion chime.
///
/// Failures are logged and swallowed; there is no retry.
/// Returns whether playback was started.
pub fn ring_completion(player: &dyn SoundPlayer, source: &SoundSource) -> bool {
    match player.play(source) {
        Ok(()) => {
            tracing::debug!(sound = source.name(), "完了チャイムを再生しました");
            true
        }
        Err(e) => {
            tracing::warn!(sound = source.name(), error = %e, "完了チャイムを再生できませんでした");
            false
        }
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<SoundSource>>,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls
            .lock()
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?
            .push(source.clone());
        Ok(())
    }
}
