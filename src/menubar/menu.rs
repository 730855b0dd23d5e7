//! Tray menu configuration.
//!
//! The menu is a disabled status line followed by "Show App" and "Quit".
//! The configuration logic is platform-independent; the native menu is
//! built from it in `mod.rs`.

use crate::types::TimerState;

use super::event::{MenuAction, MenuItemId};

// ============================================================================
// MenuItemConfig
// ============================================================================

/// Configuration for a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemConfig {
    /// Item identifier
    pub id: MenuItemId,
    /// Display text for the menu item
    pub text: String,
    /// Whether the menu item is enabled (clickable)
    pub enabled: bool,
}

impl MenuItemConfig {
    /// Creates a new menu item configuration.
    pub fn new(id: MenuItemId, text: impl Into<String>, enabled: bool) -> Self {
        Self {
            id,
            text: text.into(),
            enabled,
        }
    }
}

// ============================================================================
// MenuConfig
// ============================================================================

/// Complete menu configuration based on current timer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Status line (always disabled)
    pub status: MenuItemConfig,
    /// Show App button
    pub show_app: MenuItemConfig,
    /// Quit button
    pub quit: MenuItemConfig,
}

// ============================================================================
// MenuBuilder
// ============================================================================

/// Builds menu configuration from timer state.
#[derive(Debug, Default)]
pub struct MenuBuilder;

impl MenuBuilder {
    /// Creates a new MenuBuilder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the menu configuration for `state`.
    pub fn build(&self, state: &TimerState) -> MenuConfig {
        MenuConfig {
            status: MenuItemConfig::new(MenuItemId::Status, Self::status_text(state), false),
            show_app: MenuItemConfig::new(MenuItemId::ShowApp, MenuAction::ShowApp.label(), true),
            quit: MenuItemConfig::new(MenuItemId::Quit, MenuAction::Quit.label(), true),
        }
    }

    /// Status line text, e.g. "作業: 24:59".
    pub fn status_text(state: &TimerState) -> String {
        let suffix = if state.is_running() { "" } else { " (停止中)" };
        format!("{}: {}{}", state.mode().label(), state.format_time(), suffix)
    }
}

// ============================================================================
// Tests
// ============================================================================
