//! State management for the resolution switcher.

use crate::services::DisplayModeService;
use crate::tools::ToolPaths;
use std::sync::{Arc, Mutex};

pub mod panel;

pub use panel::PanelState;
#[cfg(target_os = "macos")]
pub use panel::{TrayAction, TrayAnchor};

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    /// Owns the cached persistent screen id between discovery and apply.
    pub modes: Arc<DisplayModeService>,
    pub panel: Arc<Mutex<PanelState>>,
}

impl AppState {
    pub fn new(paths: ToolPaths) -> Self {
        Self {
            modes: Arc::new(DisplayModeService::new(paths)),
            panel: Arc::new(Mutex::new(PanelState::new())),
        }
    }
}
