//! Application configuration constants.

/// File name of the bundled hardware-mode tool.
pub const HARDWARE_TOOL_NAME: &str = "screenresolution";

/// Install locations checked for `displayplacer`, Apple silicon first.
pub const SCALING_TOOL_CANDIDATES: [&str; 2] = [
    "/opt/homebrew/bin/displayplacer",
    "/usr/local/bin/displayplacer",
];

/// Directory (relative to the manifest) holding the hardware tool in development builds.
pub const DEV_TOOL_DIR: &str = "bin";

/// Panel width in logical pixels.
#[cfg(any(target_os = "macos", test))]
pub const PANEL_WIDTH: u32 = 360;
/// Panel height for a single display.
pub const PANEL_BASE_HEIGHT: u32 = 130;
/// Extra height per additional display.
pub const PANEL_HEIGHT_PER_DISPLAY: u32 = 60;

#[cfg(target_os = "macos")]
pub const TRAY_TOOLTIP: &str = "SimpleRes";

pub const SCALED_GROUP_LABEL: &str = "Scaled (Recommended)";
pub const HARDWARE_GROUP_LABEL: &str = "Hardware Modes (Advanced)";

/// A tray click arriving this soon after the panel lost focus is the click
/// that caused it, and must not reopen the panel.
#[cfg(any(target_os = "macos", test))]
pub const TRAY_REOPEN_GUARD: std::time::Duration = std::time::Duration::from_millis(250);
