//! Service layer for business logic.
//!
//! Separates tool and platform access from UI handlers for better testability.

pub mod display_mode_service;
pub mod display_service;
#[cfg(target_os = "macos")]
pub mod tray_service;

pub use display_mode_service::DisplayModeService;
pub use display_service::DisplayService;
