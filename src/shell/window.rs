//! Host window abstraction.

use std::fmt;

/// Visibility of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowVisibility {
    /// Shown and restored
    #[default]
    Visible,
    /// Minimized to the dock / taskbar
    Minimized,
    /// Hidden; only reachable through the tray
    Hidden,
}

impl WindowVisibility {
    /// Returns the string representation of the visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowVisibility::Visible => "visible",
            WindowVisibility::Minimized => "minimized",
            WindowVisibility::Hidden => "hidden",
        }
    }
}

impl fmt::Display for WindowVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The window surface hosting the timer view.
pub trait HostWindow {
    /// Shows and restores the window.
    fn show(&mut self);

    /// Hides the window without terminating the process.
    fn hide(&mut self);

    /// Minimizes the window.
    fn minimize(&mut self);

    /// Returns the current visibility.
    fn visibility(&self) -> WindowVisibility;

    /// Returns true if the window is fully shown.
    fn is_visible(&self) -> bool {
        self.visibility() == WindowVisibility::Visible
    }
}

/// In-memory window that only records its visibility.
#[derive(Debug, Default)]
pub struct MockWindow {
    visibility: WindowVisibility,
    history: Vec<WindowVisibility>,
}

impl MockWindow {
    /// Creates a visible mock window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every visibility the window has been set to, in order.
    pub fn history(&self) -> &[WindowVisibility] {
        &self.history
    }

    fn set(&mut self, visibility: WindowVisibility) {
        self.visibility = visibility;
        self.history.push(visibility);
    }
}

impl HostWindow for MockWindow {
    fn show(&mut self) {
        self.set(WindowVisibility::Visible);
    }

    fn hide(&mut self) {
        self.set(WindowVisibility::Hidden);
    }

    fn minimize(&mut self) {
        self.set(WindowVisibility::Minimized);
    }

    fn visibility(&self) -> WindowVisibility {
        self.visibility
    }
}
