//! Core data types for the Pomodoro Timer.
//!
//! This module defines:
//! - The three timer presets (`TimerMode`)
//! - The countdown state machine (`TimerState`) and its pure transitions
//! - Application configuration (`config`)

pub mod config;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use config::{AppConfig, ConfigError, SoundSetting};

// ============================================================================
// TimerMode
// ============================================================================

/// The three fixed-duration timer presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Focused work session (25 minutes)
    #[default]
    Work,
    /// Short break (5 minutes)
    ShortBreak,
    /// Long break (15 minutes)
    LongBreak,
}

impl TimerMode {
    /// All modes in display order.
    pub const ALL: [TimerMode; 3] = [TimerMode::Work, TimerMode::ShortBreak, TimerMode::LongBreak];

    /// Returns the preset duration in whole minutes.
    pub const fn preset_minutes(self) -> u32 {
        match self {
            TimerMode::Work => 25,
            TimerMode::ShortBreak => 5,
            TimerMode::LongBreak => 15,
        }
    }

    /// Returns the preset duration in seconds.
    pub const fn preset_seconds(self) -> u32 {
        self.preset_minutes() * 60
    }

    /// Returns the stable serialized name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Work => "work",
            TimerMode::ShortBreak => "short_break",
            TimerMode::LongBreak => "long_break",
        }
    }

    /// Returns the human-readable label shown on the mode tabs.
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Work => "作業",
            TimerMode::ShortBreak => "短い休憩",
            TimerMode::LongBreak => "長い休憩",
        }
    }

    /// Returns true for the two break presets.
    pub fn is_break(&self) -> bool {
        !matches!(self, TimerMode::Work)
    }

    /// Returns the footer message for the mode.
    pub fn message(&self) -> &'static str {
        if self.is_break() {
            "休憩の時間です！"
        } else {
            "集中する時間です！"
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimerMode {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" | "w" => Ok(TimerMode::Work),
            "short-break" | "short_break" | "short" | "s" => Ok(TimerMode::ShortBreak),
            "long-break" | "long_break" | "long" | "l" => Ok(TimerMode::LongBreak),
            other => Err(StateError::UnknownMode(other.to_string())),
        }
    }
}

// ============================================================================
// StateError
// ============================================================================

/// Errors raised when a timer state or mode cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The mode name is not one of the presets.
    #[error("不明なモードです: {0}")]
    UnknownMode(String),

    /// Remaining time exceeds the preset of the mode.
    #[error("残り時間 {remaining}秒 は {mode} のプリセット ({limit}秒) を超えています")]
    RemainingOutOfRange {
        /// Mode of the rejected state
        mode: TimerMode,
        /// Remaining seconds of the rejected state
        remaining: u32,
        /// Preset limit of the mode
        limit: u32,
    },

    /// A running state must have time left.
    #[error("残り時間が0のタイマーは実行中にできません")]
    RunningWithoutTime,
}

// ============================================================================
// TickOutcome
// ============================================================================

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running; nothing changed.
    Idle,
    /// One second was counted down.
    Counted,
    /// The countdown reached zero and stopped.
    Completed,
}

impl TickOutcome {
    /// Returns true if this tick raised the completion signal.
    pub fn is_completed(&self) -> bool {
        matches!(self, TickOutcome::Completed)
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The countdown state.
///
/// Invariants:
/// - `remaining_seconds` is within `0..=mode.preset_seconds()`
/// - `running` implies `remaining_seconds > 0`
///
/// Fields are private; every transition consumes the state and returns the
/// next one, so the owner only ever replaces its value with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimerState")]
pub struct TimerState {
    mode: TimerMode,
    remaining_seconds: u32,
    running: bool,
}

impl TimerState {
    /// Creates a state at rest with the full preset of `mode`.
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            remaining_seconds: mode.preset_seconds(),
            running: false,
        }
    }

    /// Builds a state from raw parts, checking the invariants.
    pub fn from_parts(
        mode: TimerMode,
        remaining_seconds: u32,
        running: bool,
    ) -> Result<Self, StateError> {
        let limit = mode.preset_seconds();
        if remaining_seconds > limit {
            return Err(StateError::RemainingOutOfRange {
                mode,
                remaining: remaining_seconds,
                limit,
            });
        }
        if running && remaining_seconds == 0 {
            return Err(StateError::RunningWithoutTime);
        }
        Ok(Self {
            mode,
            remaining_seconds,
            running,
        })
    }

    /// Flips the running flag.
    ///
    /// A finished countdown cannot be started again; reset or change the
    /// mode first.
    #[must_use]
    pub fn toggle(self) -> Self {
        if self.is_finished() {
            return self;
        }
        Self {
            running: !self.running,
            ..self
        }
    }

    /// Restores the full preset of the current mode and stops.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.mode)
    }

    /// Switches to `mode`, abandoning any countdown in progress.
    #[must_use]
    pub fn change_mode(self, mode: TimerMode) -> Self {
        Self::new(mode)
    }

    /// Advances the countdown by one second.
    ///
    /// The tick that reaches `00:00` completes the countdown and stops it.
    #[must_use]
    pub fn tick(self) -> (Self, TickOutcome) {
        if !self.running {
            return (self, TickOutcome::Idle);
        }

        let remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if remaining_seconds == 0 {
            let next = Self {
                remaining_seconds: 0,
                running: false,
                ..self
            };
            return (next, TickOutcome::Completed);
        }

        (
            Self {
                remaining_seconds,
                ..self
            },
            TickOutcome::Counted,
        )
    }

    /// Returns the current mode.
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Returns the remaining seconds.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Returns true if the countdown is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true once the countdown has reached zero.
    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Minutes part of the remaining time.
    pub fn minutes(&self) -> u32 {
        self.remaining_seconds / 60
    }

    /// Seconds part of the remaining time.
    pub fn seconds(&self) -> u32 {
        self.remaining_seconds % 60
    }

    /// Full preset length of the current mode in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.mode.preset_seconds()
    }

    /// Seconds counted down so far.
    pub fn elapsed_seconds(&self) -> u32 {
        self.total_seconds() - self.remaining_seconds
    }

    /// Fraction of the preset already elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        f64::from(self.elapsed_seconds()) / f64::from(self.total_seconds())
    }

    /// Formats the remaining time as `MM:SS`.
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds())
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerMode::Work)
    }
}

/// Unchecked wire form of `TimerState`.
#[derive(Deserialize)]
struct RawTimerState {
    mode: TimerMode,
    remaining_seconds: u32,
    running: bool,
}

impl TryFrom<RawTimerState> for TimerState {
    type Error = StateError;

    fn try_from(raw: RawTimerState) -> Result<Self, Self::Error> {
        Self::from_parts(raw.mode, raw.remaining_seconds, raw.running)
    }
}

// ============================================================================
// Tests
// ============================================================================
