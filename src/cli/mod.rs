//! CLI module for the Pomodoro Timer.
//!
//! This module provides the terminal interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Line-based keyboard commands
//! - `display`: Terminal view and output formatting

pub mod commands;
pub mod display;
pub mod input;

pub use commands::{Cli, Commands};
pub use display::{Display, PresetInfo, TerminalWindow};
pub use input::{InputCommand, HELP_TEXT};
