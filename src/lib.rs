//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the tray Pomodoro timer.
//! It includes:
//! - Timer modes and the pure countdown state machine
//! - Countdown engine with a single cancellable one-second tick
//! - Window shell (minimize, close-to-tray, quit)
//! - Tray icon with countdown title and "Show App" / "Quit" menu (macOS only)
//! - Completion chime playback
//! - CLI parsing and the terminal view

pub mod app;
pub mod cli;
pub mod engine;
pub mod menubar;
pub mod shell;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{AppConfig, ConfigError, SoundSetting, StateError, TickOutcome, TimerMode, TimerState};

pub use app::App;

pub use engine::{EngineCommand, TickSchedule, TimerEngine, TimerEvent, TICK_PERIOD};

pub use shell::{CloseDecision, HostWindow, MockWindow, ShellOutcome, WindowShell, WindowVisibility};

// Re-export menubar types
pub use menubar::{
    EventHandler, IconManager, MenuAction, MenuBuilder, MenuConfig, MenuItemConfig, MenuItemId,
    TrayEvent, TrayIconManager, TrayUpdate,
};

// Re-export sound types
pub use sound::{
    get_default_sound, resolve_sound, ring_completion, try_create_player, MockSoundPlayer,
    RodioSoundPlayer, SoundError, SoundPlayer, SoundSource,
};
