//! Countdown engine for the Pomodoro Timer.
//!
//! - `timer`: Engine applying state transitions and emitting events
//! - `schedule`: Cancellable one-second tick handle

pub mod schedule;
pub mod timer;

pub use schedule::{TickSchedule, TICK_PERIOD};
pub use timer::{EngineCommand, TimerEngine, TimerEvent};
