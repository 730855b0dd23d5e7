//! Title and tooltip text for the tray icon.
//!
//! This module handles:
//! - Generating the countdown title (e.g., "🍅 15:30")
//! - Tracking mode changes so callers can skip redundant updates

use crate::types::{TimerMode, TimerState};

// ============================================================================
// Constants
// ============================================================================

/// Tooltip shown on hover.
pub const TOOLTIP: &str = "ポモドーロタイマー";

/// Emoji for work session
const WORKING_EMOJI: &str = "🍅";

/// Emoji for break session
const BREAK_EMOJI: &str = "☕";

/// Emoji for a countdown at rest
const PAUSED_EMOJI: &str = "⏸";

// ============================================================================
// IconManager
// ============================================================================

/// Generates the tray title from the timer state.
#[derive(Debug, Default)]
pub struct IconManager {
    /// Last rendered title
    last_title: Option<String>,
}

impl IconManager {
    /// Creates a new IconManager.
    pub fn new() -> Self {
        Self { last_title: None }
    }

    /// Generates the title text for the tray.
    ///
    /// Format:
    /// - Running work: "🍅 MM:SS"
    /// - Running break: "☕ MM:SS"
    /// - At rest: "⏸ MM:SS"
    ///
    /// # Examples
    ///
    /// ```
    /// use pomodoro_tray::menubar::icon::IconManager;
    /// use pomodoro_tray::types::TimerState;
    ///
    /// let manager = IconManager::new();
    /// let state = TimerState::default().toggle();
    /// assert_eq!(manager.generate_title(&state), "🍅 25:00");
    /// ```
    pub fn generate_title(&self, state: &TimerState) -> String {
        let emoji = if state.is_running() {
            Self::get_emoji(state.mode())
        } else {
            PAUSED_EMOJI
        };
        format!("{} {}", emoji, state.format_time())
    }

    /// Returns the emoji for a running countdown of `mode`.
    pub fn get_emoji(mode: TimerMode) -> &'static str {
        if mode.is_break() {
            BREAK_EMOJI
        } else {
            WORKING_EMOJI
        }
    }

    /// Returns the new title if it differs from the last one returned.
    pub fn title_if_changed(&mut self, state: &TimerState) -> Option<String> {
        let title = self.generate_title(state);
        if self.last_title.as_deref() == Some(title.as_str()) {
            return None;
        }
        self.last_title = Some(title.clone());
        Some(title)
    }
}

// ============================================================================
// Tests
// ============================================================================
