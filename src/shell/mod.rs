//! Window visibility orchestration.
//!
//! The shell owns the host window and decides what minimize, close and tray
//! interactions do to it:
//! - minimize minimizes
//! - close hides the window and keeps the process alive
//! - a tray click toggles between shown and hidden
//! - tray "Show App" shows, tray "Quit" is the only way to exit

pub mod window;

pub use window::{HostWindow, MockWindow, WindowVisibility};

use crate::menubar::{MenuAction, TrayEvent};

// ============================================================================
// Outcomes
// ============================================================================

/// What the host should do with a native close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Keep running; the window has been hidden
    Hide,
    /// Let the process terminate
    Exit,
}

/// Whether the app loop keeps running after a shell interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Keep running
    Continue,
    /// Terminate the process
    Exit,
}

impl ShellOutcome {
    /// Returns true if the process should terminate.
    pub fn is_exit(&self) -> bool {
        matches!(self, ShellOutcome::Exit)
    }
}

// ============================================================================
// WindowShell
// ============================================================================

/// Applies window commands and tray interactions to a host window.
#[derive(Debug)]
pub struct WindowShell<W: HostWindow> {
    window: W,
    quitting: bool,
}

impl<W: HostWindow> WindowShell<W> {
    /// Wraps a host window.
    pub fn new(window: W) -> Self {
        Self {
            window,
            quitting: false,
        }
    }

    /// Minimizes the window.
    pub fn minimize_window(&mut self) {
        tracing::info!("ウィンドウを最小化");
        self.window.minimize();
    }

    /// Hides the window instead of closing it.
    pub fn close_window(&mut self) {
        tracing::info!("ウィンドウを非表示にしました（トレイから再表示できます）");
        self.window.hide();
    }

    /// Shows and restores the window.
    pub fn show_window(&mut self) {
        tracing::info!("ウィンドウを表示");
        self.window.show();
    }

    /// Handles a close request from the host.
    ///
    /// Hides the window unless a quit has been requested.
    pub fn on_close_requested(&mut self) -> CloseDecision {
        if self.quitting {
            return CloseDecision::Exit;
        }
        self.close_window();
        CloseDecision::Hide
    }

    /// Toggles between shown and hidden.
    pub fn on_tray_click(&mut self) {
        if self.window.is_visible() {
            self.window.hide();
        } else {
            self.window.show();
        }
        tracing::debug!(visibility = %self.window.visibility(), "トレイクリック");
    }

    /// Handles a tray menu action.
    pub fn on_menu_action(&mut self, action: MenuAction) -> ShellOutcome {
        match action {
            MenuAction::ShowApp => {
                self.show_window();
                ShellOutcome::Continue
            }
            MenuAction::Quit => {
                self.request_quit();
                ShellOutcome::Exit
            }
        }
    }

    /// Handles any tray event.
    pub fn on_tray_event(&mut self, event: TrayEvent) -> ShellOutcome {
        match event {
            TrayEvent::Click => {
                self.on_tray_click();
                ShellOutcome::Continue
            }
            TrayEvent::Menu(action) => self.on_menu_action(action),
        }
    }

    /// Marks the process as quitting so the next close request exits.
    pub fn request_quit(&mut self) {
        tracing::info!("終了が要求されました");
        self.quitting = true;
    }

    /// Returns true once quit has been requested.
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Returns the current visibility.
    pub fn visibility(&self) -> WindowVisibility {
        self.window.visibility()
    }

    /// Returns the host window.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Returns the host window mutably.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_shell() -> WindowShell<MockWindow> {
        WindowShell::new(MockWindow::new())
    }

    #[test]
    fn test_minimize() {
        let mut shell = create_shell();
        shell.minimize_window();
        assert_eq!(shell.visibility(), WindowVisibility::Minimized);
    }

    #[test]
    fn test_close_hides() {
        let mut shell = create_shell();
        shell.close_window();
        assert_eq!(shell.visibility(), WindowVisibility::Hidden);
        assert!(!shell.is_quitting());
    }

    #[test]
    fn test_close_request_hides_unless_quitting() {
        let mut shell = create_shell();
        assert_eq!(shell.on_close_requested(), CloseDecision::Hide);
        assert_eq!(shell.visibility(), WindowVisibility::Hidden);

        shell.request_quit();
        assert_eq!(shell.on_close_requested(), CloseDecision::Exit);
    }

    #[test]
    fn test_tray_click_toggles() {
        let mut shell = create_shell();
        shell.on_tray_click();
        assert_eq!(shell.visibility(), WindowVisibility::Hidden);
        shell.on_tray_click();
        assert_eq!(shell.visibility(), WindowVisibility::Visible);
    }

    #[test]
    fn test_tray_click_restores_minimized() {
        let mut shell = create_shell();
        shell.minimize_window();
        shell.on_tray_click();
        assert_eq!(shell.visibility(), WindowVisibility::Visible);
    }

    #[test]
    fn test_menu_show_app() {
        let mut shell = create_shell();
        shell.close_window();
        let outcome = shell.on_menu_action(MenuAction::ShowApp);
        assert_eq!(outcome, ShellOutcome::Continue);
        assert_eq!(shell.visibility(), WindowVisibility::Visible);
    }

    #[test]
    fn test_menu_quit() {
        let mut shell = create_shell();
        let outcome = shell.on_tray_event(TrayEvent::Menu(MenuAction::Quit));
        assert!(outcome.is_exit());
        assert!(shell.is_quitting());
    }
}
