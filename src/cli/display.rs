//! Terminal view for the Pomodoro Timer.
//!
//! This module provides:
//! - Frame rendering (mode tabs, `MM:SS`, progress bar, controls, message)
//! - `TerminalWindow`, the terminal as a host window
//! - Preset listing and error output

use std::io::{self, Write};

use serde::Serialize;

use crate::shell::{HostWindow, WindowVisibility};
use crate::types::{TimerMode, TimerState};

/// Width of the progress bar in cells.
const PROGRESS_WIDTH: usize = 30;

/// ANSI sequence clearing the screen and homing the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

// ============================================================================
// Display
// ============================================================================

/// Rendering helpers for terminal output.
pub struct Display;

impl Display {
    /// Renders the full timer view.
    pub fn render_frame(state: &TimerState) -> String {
        let mut frame = String::new();
        frame.push_str("ポモドーロタイマー                 [_] [x]\n");
        frame.push_str("──────────────────────────────────────────\n");
        frame.push_str(&Self::render_tabs(state.mode()));
        frame.push('\n');
        frame.push('\n');
        frame.push_str(&format!("                 {}\n", state.format_time()));
        frame.push_str(&format!("      {}\n", Self::render_progress(state.progress())));
        frame.push('\n');
        let control = if state.is_running() {
            "⏸ 一時停止"
        } else {
            "▶ 開始"
        };
        frame.push_str(&format!("          {}    ↺ リセット\n", control));
        frame.push('\n');
        frame.push_str(&format!("            {}\n", state.mode().message()));
        frame
    }

    /// Renders the one-line view used while minimized.
    pub fn render_compact(state: &TimerState) -> String {
        let glyph = if state.is_running() { "▶" } else { "⏸" };
        format!("{} {} {}", glyph, state.mode().label(), state.format_time())
    }

    /// Renders the mode tabs with the active one bracketed.
    pub fn render_tabs(active: TimerMode) -> String {
        TimerMode::ALL
            .iter()
            .map(|mode| {
                if *mode == active {
                    format!("[{}]", mode.label())
                } else {
                    format!(" {} ", mode.label())
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Renders a progress bar for a fraction in `0.0..=1.0`.
    pub fn render_progress(progress: f64) -> String {
        let filled = (progress.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
        format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(PROGRESS_WIDTH - filled)
        )
    }

    /// Prints the preset table.
    pub fn show_presets(json: bool) -> serde_json::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&PresetInfo::all())?);
            return Ok(());
        }

        println!("プリセット");
        println!("─────────────────────────────");
        for preset in PresetInfo::all() {
            println!("{:<12} {:>3}分", preset.label, preset.minutes);
        }
        Ok(())
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }
}

// ============================================================================
// PresetInfo
// ============================================================================

/// One row of the preset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    /// Mode
    pub mode: TimerMode,
    /// Display label
    pub label: &'static str,
    /// Duration in minutes
    pub minutes: u32,
}

impl PresetInfo {
    /// Returns every preset in display order.
    pub fn all() -> Vec<Self> {
        TimerMode::ALL
            .iter()
            .map(|mode| Self {
                mode: *mode,
                label: mode.label(),
                minutes: mode.preset_minutes(),
            })
            .collect()
    }
}

// ============================================================================
// TerminalWindow
// ============================================================================

/// The terminal acting as the host window.
///
/// Visible renders the full frame, minimized a single status line, hidden
/// nothing.
pub struct TerminalWindow<W: Write> {
    out: W,
    visibility: WindowVisibility,
    clear_screen: bool,
}

impl TerminalWindow<io::Stdout> {
    /// Creates a window on stdout, clearing the screen between frames when
    /// stdout is a terminal.
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        let out = io::stdout();
        let clear_screen = out.is_terminal();
        Self::new(out, clear_screen)
    }
}

impl<W: Write> TerminalWindow<W> {
    /// Creates a visible window writing to `out`.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            visibility: WindowVisibility::Visible,
            clear_screen,
        }
    }

    /// Draws `state` according to the current visibility.
    pub fn render(&mut self, state: &TimerState) -> io::Result<()> {
        match self.visibility {
            WindowVisibility::Visible => {
                if self.clear_screen {
                    write!(self.out, "{}", CLEAR_SCREEN)?;
                }
                write!(self.out, "{}", Display::render_frame(state))?;
            }
            WindowVisibility::Minimized => {
                writeln!(self.out, "{}", Display::render_compact(state))?;
            }
            WindowVisibility::Hidden => {}
        }
        self.out.flush()
    }

    /// Writes a message line regardless of visibility.
    pub fn print_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> HostWindow for TerminalWindow<W> {
    fn show(&mut self) {
        self.visibility = WindowVisibility::Visible;
    }

    fn hide(&mut self) {
        self.visibility = WindowVisibility::Hidden;
    }

    fn minimize(&mut self) {
        self.visibility = WindowVisibility::Minimized;
    }

    fn visibility(&self) -> WindowVisibility {
        self.visibility
    }
}

impl<W: Write> std::fmt::Debug for TerminalWindow<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalWindow")
            .field("visibility", &self.visibility)
            .field("clear_screen", &self.clear_screen)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
