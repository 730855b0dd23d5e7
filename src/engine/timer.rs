//! Timer engine for the Pomodoro Timer.
//!
//! This module provides the countdown engine:
//! - Applies the pure `TimerState` transitions
//! - Arms the tick schedule while running and cancels it otherwise
//! - Emits events for rendering, the tray and the completion chime

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::debug;

use crate::types::{TickOutcome, TimerMode, TimerState};

use super::schedule::TickSchedule;

// ============================================================================
// TimerEvent
// ============================================================================

/// Events emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started {
        /// Remaining seconds at start
        remaining_seconds: u32,
    },
    /// Countdown paused
    Paused {
        /// Remaining seconds at pause
        remaining_seconds: u32,
    },
    /// Countdown reset to the preset of the current mode
    Reset {
        /// Current mode
        mode: TimerMode,
    },
    /// Mode switched
    ModeChanged {
        /// New mode
        mode: TimerMode,
    },
    /// One second elapsed
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Countdown reached zero
    Completed {
        /// Mode that completed
        mode: TimerMode,
    },
}

// ============================================================================
// EngineCommand
// ============================================================================

/// User-facing commands accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    /// Start or pause
    Toggle,
    /// Restore the preset of the current mode
    Reset,
    /// Switch preset
    ChangeMode(TimerMode),
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Owns the single live `TimerState` and its tick schedule.
///
/// The schedule is armed exactly when the state is running. Every method
/// that stops the countdown cancels the schedule before returning.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Repeating one-second tick
    schedule: TickSchedule,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates an engine at rest on the Work preset.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::default(),
            schedule: TickSchedule::new(),
            event_tx,
        }
    }

    /// Applies a command.
    pub fn apply(&mut self, command: EngineCommand) -> Result<()> {
        match command {
            EngineCommand::Toggle => self.toggle(),
            EngineCommand::Reset => self.reset(),
            EngineCommand::ChangeMode(mode) => self.change_mode(mode),
        }
    }

    /// Starts or pauses the countdown.
    pub fn toggle(&mut self) -> Result<()> {
        let next = self.state.toggle();
        if next == self.state {
            debug!("countdown finished, toggle ignored");
            return Ok(());
        }

        self.replace(next);
        let remaining_seconds = next.remaining_seconds();
        if next.is_running() {
            self.send(TimerEvent::Started { remaining_seconds })
                .context("Failed to send started event")
        } else {
            self.send(TimerEvent::Paused { remaining_seconds })
                .context("Failed to send paused event")
        }
    }

    /// Resets the countdown to the preset of the current mode.
    pub fn reset(&mut self) -> Result<()> {
        self.replace(self.state.reset());
        self.send(TimerEvent::Reset {
            mode: self.state.mode(),
        })
        .context("Failed to send reset event")
    }

    /// Switches to another preset.
    pub fn change_mode(&mut self, mode: TimerMode) -> Result<()> {
        self.replace(self.state.change_mode(mode));
        self.send(TimerEvent::ModeChanged { mode })
            .context("Failed to send mode changed event")
    }

    /// Handles one elapsed second.
    pub fn on_tick(&mut self) -> Result<TickOutcome> {
        let (next, outcome) = self.state.tick();
        self.replace(next);

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Counted => {
                self.send(TimerEvent::Tick {
                    remaining_seconds: next.remaining_seconds(),
                })
                .context("Failed to send tick event")?;
            }
            TickOutcome::Completed => {
                self.send(TimerEvent::Tick {
                    remaining_seconds: 0,
                })
                .context("Failed to send tick event")?;
                self.send(TimerEvent::Completed { mode: next.mode() })
                    .context("Failed to send completed event")?;
            }
        }

        Ok(outcome)
    }

    /// Waits for the next scheduled second.
    ///
    /// Never resolves while the countdown is stopped.
    pub async fn next_tick(&mut self) {
        self.schedule.tick().await;
    }

    /// Waits for the next scheduled second and applies it.
    pub async fn step(&mut self) -> Result<TickOutcome> {
        self.next_tick().await;
        self.on_tick()
    }

    /// Cancels the tick schedule for teardown. The state is left as is.
    pub fn shutdown(&mut self) {
        if self.schedule.cancel() {
            debug!("tick schedule cancelled on shutdown");
        }
    }

    /// Returns the current timer state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns the tick schedule.
    pub fn schedule(&self) -> &TickSchedule {
        &self.schedule
    }

    /// Replaces the state and brings the schedule in line with it.
    fn replace(&mut self, next: TimerState) {
        self.state = next;
        if next.is_running() {
            self.schedule.arm();
        } else {
            self.schedule.cancel();
        }
        debug!(
            mode = %next.mode(),
            remaining = next.remaining_seconds(),
            running = next.is_running(),
            "timer state updated"
        );
    }

    fn send(&self, event: TimerEvent) -> Result<(), mpsc::error::SendError<TimerEvent>> {
        self.event_tx.send(event)
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("state", &self.state)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
