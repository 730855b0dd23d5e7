//! Built-in completion chime.
//!
//! The chime is synthesized at playback time from sine tones, so no audio
//! asset needs to be shipped or fetched.

use std::time::Duration;

use rodio::source::{SineWave, Source};

/// One tone of the chime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChimeNote {
    /// Frequency in Hz
    pub frequency: f32,
    /// Tone length
    pub duration: Duration,
}

/// Output gain applied to every note.
const CHIME_VOLUME: f32 = 0.25;

/// Gap-free rising two-note chime followed by a held top note.
pub const CHIME_NOTES: &[ChimeNote] = &[
    ChimeNote {
        frequency: 659.25,
        duration: Duration::from_millis(180),
    },
    ChimeNote {
        frequency: 880.0,
        duration: Duration::from_millis(180),
    },
    ChimeNote {
        frequency: 1318.5,
        duration: Duration::from_millis(420),
    },
];

/// Returns the notes of the built-in chime.
#[must_use]
pub const fn get_chime_notes() -> &'static [ChimeNote] {
    CHIME_NOTES
}

/// Total length of the built-in chime.
#[must_use]
pub fn chime_duration() -> Duration {
    CHIME_NOTES.iter().map(|note| note.duration).sum()
}

/// Builds the playable source for a note.
pub(crate) fn note_source(note: &ChimeNote) -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(note.frequency)
        .take_duration(note.duration)
        .fade_in(Duration::from_millis(10))
        .amplify(CHIME_VOLUME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_has_notes() {
        assert!(!get_chime_notes().is_empty());
    }

    #[test]
    fn test_chime_rises() {
        let notes = get_chime_notes();
        assert!(notes
            .windows(2)
            .all(|pair| pair[0].frequency < pair[1].frequency));
    }

    #[test]
    fn test_chime_duration_under_a_second() {
        assert_eq!(chime_duration(), Duration::from_millis(780));
    }

    #[test]
    fn test_note_source_yields_samples() {
        let source = note_source(&CHIME_NOTES[0]);
        assert_eq!(source.channels(), 1);
        assert_eq!(source.take(64).count(), 64);
    }
}
