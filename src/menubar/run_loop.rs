//! AppKit event pumping for the native tray (macOS only).
//!
//! The app loop keeps the main thread, so `NSApplication::run` is never
//! called. Instead the pending AppKit events are dispatched on every tray
//! poll, which is what draws the status item and fires the `tray-icon`
//! menu and click handlers.

#![allow(unused_unsafe)]

use anyhow::{anyhow, Result};
use objc2::MainThreadMarker;
use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy, NSEventMask};
use objc2_foundation::{NSDate, NSDefaultRunLoopMode};

/// Sets the shared application up as a menu bar only app.
///
/// Must be called on the main thread before the tray icon is built.
pub(crate) fn prepare_application() -> Result<()> {
    let mtm = MainThreadMarker::new()
        .ok_or_else(|| anyhow!("トレイアイコンはメインスレッドで作成する必要があります"))?;
    let app = NSApplication::sharedApplication(mtm);

    // No Dock icon
    let _ = app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);
    unsafe { app.finishLaunching() };

    tracing::debug!("NSApplication prepared");
    Ok(())
}

/// Dispatches every pending AppKit event without blocking.
///
/// Returns the number of events dispatched. Off the main thread it does
/// nothing.
pub(crate) fn pump_events() -> usize {
    let Some(mtm) = MainThreadMarker::new() else {
        return 0;
    };
    let app = NSApplication::sharedApplication(mtm);
    let until = NSDate::distantPast();

    let mut dispatched = 0;
    loop {
        let event = unsafe {
            app.nextEventMatchingMask_untilDate_inMode_dequeue(
                NSEventMask::Any,
                Some(&until),
                NSDefaultRunLoopMode,
                true,
            )
        };
        match event {
            Some(event) => {
                unsafe { app.sendEvent(&event) };
                dispatched += 1;
            }
            None => break,
        }
    }

    if dispatched > 0 {
        tracing::trace!(dispatched, "AppKit events dispatched");
    }
    dispatched
}
