//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local` + `async_compat::Compat`: tool invocations, awaited on the UI thread
//! - `slint::invoke_from_event_loop`: tray events arriving from outside the event loop

pub mod handlers;
pub mod options;
pub mod panel;
mod state_helpers;

pub use handlers::setup_handlers;
pub use panel::{hide_panel, show_panel};
#[cfg(target_os = "macos")]
pub use panel::toggle_panel;
pub use state_helpers::*;
