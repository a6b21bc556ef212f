//! Panel visibility and geometry.
//!
//! The panel is the only persistent piece of UI state. Each display's
//! dropdown is rendered from scratch on every open.

use crate::config::{PANEL_BASE_HEIGHT, PANEL_HEIGHT_PER_DISPLAY};
#[cfg(any(target_os = "macos", test))]
use crate::config::{PANEL_WIDTH, TRAY_REOPEN_GUARD};
use log::debug;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

/// What a click on the tray icon should do.
#[cfg(any(target_os = "macos", test))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    Show,
    Hide,
    /// The click itself took focus away from the open panel, which already
    /// closed it.
    Ignore,
}

#[derive(Debug, Default)]
pub struct PanelState {
    visibility: PanelVisibility,
    alert_open: bool,
    /// Only the tray reads this back.
    #[cfg_attr(not(any(target_os = "macos", test)), allow(dead_code))]
    last_closed: Option<Instant>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PanelVisibility::Open
    }

    pub fn open(&mut self) {
        debug!("Panel opened");
        self.visibility = PanelVisibility::Open;
    }

    pub fn close(&mut self, now: Instant) {
        if self.is_open() {
            debug!("Panel closed");
            self.last_closed = Some(now);
        }
        self.visibility = PanelVisibility::Closed;
    }

    /// Marks an error alert as shown over the panel. While it is up, the
    /// panel losing focus does not close it.
    pub fn set_alert_open(&mut self, open: bool) {
        self.alert_open = open;
    }

    pub fn should_close_on_blur(&self) -> bool {
        self.is_open() && !self.alert_open
    }

    #[cfg(any(target_os = "macos", test))]
    pub fn tray_clicked(&self, now: Instant) -> TrayAction {
        if self.is_open() {
            return TrayAction::Hide;
        }
        match self.last_closed {
            Some(closed) if now.saturating_duration_since(closed) < TRAY_REOPEN_GUARD => {
                TrayAction::Ignore
            }
            _ => TrayAction::Show,
        }
    }
}

/// Panel height in logical pixels for the given number of displays.
pub fn panel_height(display_count: usize) -> u32 {
    let extra = display_count.saturating_sub(1) as u32;
    PANEL_BASE_HEIGHT + extra * PANEL_HEIGHT_PER_DISPLAY
}

/// Screen rectangle of the tray icon, in physical pixels.
#[cfg(any(target_os = "macos", test))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayAnchor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(any(target_os = "macos", test))]
impl TrayAnchor {
    /// Top-left corner that centres a panel of `panel_width` under the icon.
    pub fn panel_position(&self, panel_width: u32) -> (i32, i32) {
        let x = self.x + self.width / 2.0 - f64::from(panel_width) / 2.0;
        let y = self.y + self.height;
        (x.round() as i32, y.round() as i32)
    }

    /// Like [`panel_position`](Self::panel_position), for a window whose
    /// physical width is still zero because it has never been shown.
    pub fn panel_origin(&self, window_width: u32, scale_factor: f32) -> (i32, i32) {
        let width = if window_width > 0 {
            window_width
        } else {
            (PANEL_WIDTH as f32 * scale_factor).round() as u32
        };
        self.panel_position(width)
    }
}
