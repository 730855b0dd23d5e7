//! Event handling for tray interactions.
//!
//! This module handles:
//! - Mapping native menu item ids to actions
//! - Tray events delivered to the app loop
//!
//! Everything here is platform-independent. The native tray forwards its
//! events into a crossbeam channel as `TrayEvent`s.

use std::fmt;

use crate::types::TimerState;

// ============================================================================
// MenuAction
// ============================================================================

/// Actions that can be triggered from the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Bring the window back
    ShowApp,
    /// Terminate the process
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::ShowApp => write!(f, "show_app"),
            MenuAction::Quit => write!(f, "quit"),
        }
    }
}

impl MenuAction {
    /// Returns the menu label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ShowApp => "アプリを表示",
            MenuAction::Quit => "終了",
        }
    }
}

// ============================================================================
// MenuItemId
// ============================================================================

/// Identifiers for tray menu items.
///
/// The string form is used as the native menu item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    /// Status line (disabled)
    Status,
    /// "Show App" item
    ShowApp,
    /// "Quit" item
    Quit,
    /// Unknown or unhandled menu item
    Unknown,
}

impl MenuItemId {
    /// Returns the native id string.
    pub fn as_id(&self) -> &'static str {
        match self {
            MenuItemId::Status => "status",
            MenuItemId::ShowApp => "show",
            MenuItemId::Quit => "quit",
            MenuItemId::Unknown => "unknown",
        }
    }

    /// Parses a native id string.
    pub fn from_id(id: &str) -> Self {
        match id {
            "status" => MenuItemId::Status,
            "show" => MenuItemId::ShowApp,
            "quit" => MenuItemId::Quit,
            _ => MenuItemId::Unknown,
        }
    }

    /// Converts a menu item ID to the corresponding action.
    ///
    /// Returns `None` for items that don't trigger actions.
    pub fn to_action(&self) -> Option<MenuAction> {
        match self {
            MenuItemId::ShowApp => Some(MenuAction::ShowApp),
            MenuItemId::Quit => Some(MenuAction::Quit),
            MenuItemId::Status | MenuItemId::Unknown => None,
        }
    }
}

// ============================================================================
// EventHandler
// ============================================================================

/// Converts menu clicks into actions.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Creates a new EventHandler.
    pub fn new() -> Self {
        Self
    }

    /// Processes a menu item click and returns the corresponding action.
    pub fn handle_click(&self, item_id: MenuItemId) -> Option<MenuAction> {
        let action = item_id.to_action();

        if let Some(ref action) = action {
            tracing::info!(action = %action, "メニューからアクションを受信");
        }

        action
    }
}

// ============================================================================
// TrayEvent
// ============================================================================

/// Events delivered from the tray to the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// The tray icon itself was clicked
    Click,
    /// A menu action was chosen
    Menu(MenuAction),
}

// ============================================================================
// TrayUpdate
// ============================================================================

/// Updates pushed to the tray by the app loop.
#[derive(Debug, Clone)]
pub enum TrayUpdate {
    /// Refresh title and status line from the timer state
    State(TimerState),
    /// Remove the tray icon
    Shutdown,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod menu_action_tests {
        use super::*;

        #[test]
        fn test_display() {
            assert_eq!(format!("{}", MenuAction::ShowApp), "show_app");
            assert_eq!(format!("{}", MenuAction::Quit), "quit");
        }

        #[test]
        fn test_label() {
            assert_eq!(MenuAction::ShowApp.label(), "アプリを表示");
            assert_eq!(MenuAction::Quit.label(), "終了");
        }
    }

    mod menu_item_id_tests {
        use super::*;

        #[test]
        fn test_id_roundtrip() {
            for id in [MenuItemId::Status, MenuItemId::ShowApp, MenuItemId::Quit] {
                assert_eq!(MenuItemId::from_id(id.as_id()), id);
            }
        }

        #[test]
        fn test_from_unknown_id() {
            assert_eq!(MenuItemId::from_id("1234"), MenuItemId::Unknown);
        }

        #[test]
        fn test_to_action() {
            assert_eq!(MenuItemId::ShowApp.to_action(), Some(MenuAction::ShowApp));
            assert_eq!(MenuItemId::Quit.to_action(), Some(MenuAction::Quit));
            assert_eq!(MenuItemId::Status.to_action(), None);
            assert_eq!(MenuItemId::Unknown.to_action(), None);
        }
    }

    mod event_handler_tests {
        use super::*;

        #[test]
        fn test_handle_click() {
            let handler = EventHandler::new();
            assert_eq!(
                handler.handle_click(MenuItemId::ShowApp),
                Some(MenuAction::ShowApp)
            );
            assert_eq!(handler.handle_click(MenuItemId::Quit), Some(MenuAction::Quit));
            assert_eq!(handler.handle_click(MenuItemId::Status), None);
        }
    }
}
