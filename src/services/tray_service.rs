//! Menu-bar status item.

use crate::config::TRAY_TOOLTIP;
use crate::error::{AppError, Result};
use crate::state::{AppState, TrayAnchor};
use log::info;
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

const ICON_SIZE: u32 = 18;

/// Creates the tray icon and routes left clicks to the panel toggle.
///
/// Must run on the main thread once the event loop is running. The returned
/// icon disappears when dropped.
pub fn install(ui: slint::Weak<crate::AppWindow>, state: AppState) -> Result<TrayIcon> {
    let icon = Icon::from_rgba(monitor_glyph(), ICON_SIZE, ICON_SIZE)
        .map_err(|e| AppError::Platform(format!("Failed to build tray icon: {}", e)))?;

    let tray = TrayIconBuilder::new()
        .with_tooltip(TRAY_TOOLTIP)
        .with_icon(icon)
        .with_icon_as_template(true)
        .build()
        .map_err(|e| AppError::Platform(format!("Failed to create tray icon: {}", e)))?;

    TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
        let TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            rect,
            ..
        } = event
        else {
            return;
        };

        let anchor = TrayAnchor {
            x: rect.position.x,
            y: rect.position.y,
            width: f64::from(rect.size.width),
            height: f64::from(rect.size.height),
        };
        let ui = ui.clone();
        let state = state.clone();
        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                crate::ui::toggle_panel(&ui, &state, anchor);
            }
        });
    }));

    info!("Tray icon created");
    Ok(tray)
}

/// Black-on-transparent monitor outline; macOS tints it as a template image.
fn monitor_glyph() -> Vec<u8> {
    let mut rgba = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let bezel = (1..=16).contains(&x)
                && (2..=12).contains(&y)
                && (x == 1 || x == 16 || y == 2 || y == 12);
            let stand = ((8..=9).contains(&x) && y == 13) || ((5..=12).contains(&x) && y == 14);
            if bezel || stand {
                rgba[((y * ICON_SIZE + x) * 4 + 3) as usize] = 255;
            }
        }
    }
    rgba
}
