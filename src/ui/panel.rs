//! Showing, hiding and placing the panel window.

use crate::state::{AppState, PanelState};
#[cfg(target_os = "macos")]
use crate::state::{TrayAction, TrayAnchor};
#[cfg(target_os = "macos")]
use log::info;
use log::warn;
use slint::ComponentHandle;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Opens the panel and requests a fresh listing.
pub fn show_panel(ui: &crate::AppWindow, state: &AppState) {
    if let Err(e) = ui.show() {
        warn!("Failed to show panel: {}", e);
        return;
    }
    crate::platform::activate_app();

    if let Ok(mut panel) = state.panel.lock() {
        panel.open();
    }
    ui.global::<crate::Logic>().invoke_refresh();
}

pub fn hide_panel(ui: &crate::AppWindow, panel: &Arc<Mutex<PanelState>>) {
    if let Ok(mut panel) = panel.lock() {
        panel.close(Instant::now());
    }
    ui.global::<crate::ViewState>().set_expanded_index(-1);
    if let Err(e) = ui.hide() {
        warn!("Failed to hide panel: {}", e);
    }
}

#[cfg(target_os = "macos")]
fn place_under_tray(ui: &crate::AppWindow, anchor: TrayAnchor) {
    let window = ui.window();
    let (x, y) = anchor.panel_origin(window.size().width, window.scale_factor());
    window.set_position(slint::PhysicalPosition::new(x, y));
}

/// Handles a tray icon click.
#[cfg(target_os = "macos")]
pub fn toggle_panel(ui: &crate::AppWindow, state: &AppState, anchor: TrayAnchor) {
    let action = match state.panel.lock() {
        Ok(panel) => panel.tray_clicked(Instant::now()),
        Err(_) => TrayAction::Show,
    };

    info!("Tray clicked: {:?}", action);
    match action {
        TrayAction::Show => {
            place_under_tray(ui, anchor);
            show_panel(ui, state);
            // Size and scale factor are only final once the window is on a screen.
            place_under_tray(ui, anchor);
        }
        TrayAction::Hide => hide_panel(ui, &state.panel),
        TrayAction::Ignore => {}
    }
}
