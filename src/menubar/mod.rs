//! Tray icon for the Pomodoro Timer.
//!
//! This module provides:
//! - Countdown title and tooltip (`icon.rs`)
//! - The "Show App" / "Quit" menu (`menu.rs`)
//! - Event types and click handling (`event.rs`)
//! - `TrayIconManager`, the native tray on macOS and a no-op elsewhere
//!
//! # Architecture
//!
//! Native tray callbacks may fire outside the app loop, so they are forwarded
//! into a crossbeam channel. The app loop drains it with
//! `TrayIconManager::poll_events`. On macOS the same call first dispatches
//! pending AppKit events on the main thread, since the app loop owns that
//! thread instead of `NSApplication::run`.
//!
//! ```ignore
//! use pomodoro_tray::menubar::{TrayIconManager, TrayUpdate};
//!
//! let mut manager = TrayIconManager::new(state);
//! manager.initialize()?;
//!
//! manager.update(TrayUpdate::State(new_state));
//! for event in manager.poll_events() {
//!     // dispatch to the window shell
//! }
//! ```

pub mod event;
pub mod icon;
pub mod menu;
#[cfg(target_os = "macos")]
mod run_loop;

pub use event::{EventHandler, MenuAction, MenuItemId, TrayEvent, TrayUpdate};
pub use icon::{IconManager, TOOLTIP};
pub use menu::{MenuBuilder, MenuConfig, MenuItemConfig};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::types::TimerState;

// ============================================================================
// TrayIconManager
// ============================================================================

/// Manages the tray icon.
///
/// On macOS it owns the `tray-icon` instance; on other platforms it operates
/// in a no-op mode and only carries events injected through
/// `event_sender`.
pub struct TrayIconManager {
    /// Icon manager for title generation
    icon_manager: IconManager,
    /// Menu builder for menu configuration
    menu_builder: MenuBuilder,
    /// Last known timer state
    current_state: TimerState,
    /// Sender side of the event channel (handed to native callbacks)
    event_tx: Sender<TrayEvent>,
    /// Receiver side of the event channel
    event_rx: Receiver<TrayEvent>,
    /// Whether the manager is initialized
    initialized: bool,
    /// Platform-specific tray icon instance (macOS only)
    #[cfg(target_os = "macos")]
    tray_icon: Option<tray_icon::TrayIcon>,
    /// Status line of the native menu (macOS only)
    #[cfg(target_os = "macos")]
    status_item: Option<tray_icon::menu::MenuItem>,
}

impl TrayIconManager {
    /// Creates a new TrayIconManager.
    ///
    /// On macOS, the native tray icon is not created until `initialize()` is
    /// called.
    pub fn new(initial_state: TimerState) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            icon_manager: IconManager::new(),
            menu_builder: MenuBuilder::new(),
            current_state: initial_state,
            event_tx,
            event_rx,
            initialized: false,
            #[cfg(target_os = "macos")]
            tray_icon: None,
            #[cfg(target_os = "macos")]
            status_item: None,
        }
    }

    /// Returns whether the manager is initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns a sender that injects events as if they came from the tray.
    pub fn event_sender(&self) -> Sender<TrayEvent> {
        self.event_tx.clone()
    }

    /// Generates the current title for the tray.
    pub fn generate_title(&self) -> String {
        self.icon_manager.generate_title(&self.current_state)
    }

    /// Generates the current menu configuration.
    pub fn generate_menu_config(&self) -> MenuConfig {
        self.menu_builder.build(&self.current_state)
    }

    /// Applies an update from the app loop.
    pub fn update(&mut self, update: TrayUpdate) {
        match update {
            TrayUpdate::State(state) => {
                self.current_state = state;
                if let Some(title) = self.icon_manager.title_if_changed(&state) {
                    tracing::trace!(title = %title, "トレイタイトル更新");
                    self.apply_native_title(&title);
                }
            }
            TrayUpdate::Shutdown => {
                tracing::info!("トレイアイコンをシャットダウン");
                self.shutdown();
            }
        }
    }

    /// Drains pending tray events.
    ///
    /// On macOS this first dispatches pending AppKit events so native clicks
    /// reach the channel.
    pub fn poll_events(&self) -> Vec<TrayEvent> {
        #[cfg(target_os = "macos")]
        {
            if self.tray_icon.is_some() {
                run_loop::pump_events();
            }
        }
        self.event_rx.try_iter().collect()
    }

    /// Removes the tray icon.
    pub fn shutdown(&mut self) {
        self.initialized = false;
        #[cfg(target_os = "macos")]
        {
            tray_icon::menu::MenuEvent::set_event_handler(None::<fn(tray_icon::menu::MenuEvent)>);
            tray_icon::TrayIconEvent::set_event_handler(None::<fn(tray_icon::TrayIconEvent)>);
            self.status_item = None;
            self.tray_icon = None;
        }
    }

    #[cfg(target_os = "macos")]
    fn apply_native_title(&self, title: &str) {
        if let Some(ref tray_icon) = self.tray_icon {
            tray_icon.set_title(Some(title));
        }
        if let Some(ref status_item) = self.status_item {
            status_item.set_text(MenuBuilder::status_text(&self.current_state));
        }
    }

    #[cfg(not(target_os = "macos"))]
    fn apply_native_title(&self, _title: &str) {}

    /// Initializes the native tray icon (macOS only).
    ///
    /// Must be called from the main thread, which must also run the app
    /// loop so `poll_events` can dispatch AppKit events.
    ///
    /// # Errors
    ///
    /// Returns an error if the tray icon cannot be created.
    #[cfg(target_os = "macos")]
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        use anyhow::Context;
        use tray_icon::menu::MenuEvent;
        use tray_icon::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};

        run_loop::prepare_application()?;

        let title = self.generate_title();
        let menu_config = self.generate_menu_config();
        let (menu, status_item) = Self::build_native_menu(&menu_config)?;

        let tray_icon = TrayIconBuilder::new()
            .with_title(&title)
            .with_menu(Box::new(menu))
            .with_tooltip(TOOLTIP)
            .build()
            .context("トレイアイコンの作成に失敗しました")?;

        let menu_tx = self.event_tx.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            let handler = EventHandler::new();
            if let Some(action) = handler.handle_click(MenuItemId::from_id(&event.id.0)) {
                let _ = menu_tx.send(TrayEvent::Menu(action));
            }
        }));

        let click_tx = self.event_tx.clone();
        TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                let _ = click_tx.send(TrayEvent::Click);
            }
        }));

        self.tray_icon = Some(tray_icon);
        self.status_item = Some(status_item);
        self.initialized = true;

        tracing::info!("トレイアイコンを初期化しました");
        Ok(())
    }

    /// Initializes the tray icon (non-macOS, no-op).
    #[cfg(not(target_os = "macos"))]
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        tracing::warn!("トレイアイコンはmacOSでのみサポートされています");
        self.initialized = true;
        Ok(())
    }

    /// Builds a native menu from the configuration (macOS only).
    #[cfg(target_os = "macos")]
    fn build_native_menu(
        config: &MenuConfig,
    ) -> anyhow::Result<(tray_icon::menu::Menu, tray_icon::menu::MenuItem)> {
        use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};

        let menu = Menu::new();

        let status_item = MenuItem::with_id(
            config.status.id.as_id(),
            &config.status.text,
            config.status.enabled,
            None,
        );
        menu.append(&status_item)?;

        menu.append(&PredefinedMenuItem::separator())?;

        for item in [&config.show_app, &config.quit] {
            let native = MenuItem::with_id(item.id.as_id(), &item.text, item.enabled, None);
            menu.append(&native)?;
        }

        Ok((menu, status_item))
    }
}

impl std::fmt::Debug for TrayIconManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrayIconManager")
            .field("initialized", &self.initialized)
            .field("current_state", &self.current_state)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
