//! Event handlers for UI callbacks.
//!
//! Tool invocations are tokio futures driven on the Slint event loop through
//! `async_compat`, so the panel stays responsive while a tool runs.

use crate::error::AppError;
use crate::services::DisplayService;
use crate::state::AppState;
use async_compat::Compat;
use log::{error, info, warn};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use slint::ComponentHandle;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    ui.global::<crate::Logic>().on_refresh({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || refresh_displays(ui_handle.clone(), state.clone())
    });

    ui.global::<crate::Logic>().on_select_mode({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |token| apply_selection(ui_handle.clone(), state.clone(), token.to_string())
    });

    ui.global::<crate::Logic>().on_quit(|| {
        info!("Quit requested");
        if let Err(e) = slint::quit_event_loop() {
            error!("Failed to quit event loop: {}", e);
        }
    });
}

/// Lists displays, runs discovery and renders the result.
fn refresh_displays(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    if let Some(ui) = ui_handle.upgrade() {
        crate::ui::set_loading(&ui);
    }

    // NSScreen must be queried on the main thread, before handing off to the future.
    let displays = DisplayService::new()
        .physical_displays()
        .unwrap_or_else(|e| {
            warn!("Failed to list displays: {}", e);
            Vec::new()
        });

    let spawned = slint::spawn_local(Compat::new(async move {
        let records = state.modes.discover(&displays).await;
        if let Some(ui) = ui_handle.upgrade() {
            crate::ui::set_display_records(&ui, &records);
        }
    }));
    if let Err(e) = spawned {
        error!("Failed to start display discovery: {}", e);
    }
}

/// Applies the chosen mode. Success hides the panel, failure raises an alert
/// and leaves it open.
fn apply_selection(ui_handle: slint::Weak<crate::AppWindow>, state: AppState, token: String) {
    let spawned = slint::spawn_local(Compat::new(async move {
        match state.modes.apply_mode(&token).await {
            Ok(()) => {
                if let Some(ui) = ui_handle.upgrade() {
                    crate::ui::hide_panel(&ui, &state.panel);
                }
            }
            Err(e) => show_apply_failure(&state, &e).await,
        }
    }));
    if let Err(e) = spawned {
        error!("Failed to apply display mode: {}", e);
    }
}

async fn show_apply_failure(state: &AppState, err: &AppError) {
    if let Ok(mut panel) = state.panel.lock() {
        panel.set_alert_open(true);
    }

    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("SimpleRes")
        .set_description(format!("Failed to set resolution: {}", err))
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;

    if let Ok(mut panel) = state.panel.lock() {
        panel.set_alert_open(false);
    }
}
