use crate::error::{AppError, MissingDependency, Result};
use crate::state::AppState;
use crate::tools::ToolPaths;
use log::{error, info};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use slint::ComponentHandle;

/// Keeps startup-created platform objects alive for the lifetime of the event loop.
pub struct StartupGuard {
    #[cfg(target_os = "macos")]
    _tray: std::rc::Rc<std::cell::RefCell<Option<tray_icon::TrayIcon>>>,
}

/// Fails with every missing tool at once.
pub fn check_dependencies(paths: &ToolPaths) -> Result<()> {
    let missing = paths.missing_dependencies();
    if missing.is_empty() {
        info!(
            "Using {} for hardware modes",
            paths.hardware_tool().display()
        );
        Ok(())
    } else {
        Err(AppError::MissingDependencies(missing))
    }
}

pub fn dependency_error_message(missing: &[MissingDependency]) -> String {
    let lines: Vec<String> = missing.iter().map(|m| format!("- {}", m)).collect();
    format!(
        "SimpleRes cannot start due to missing dependencies:\n\n{}\n\n\
         Please follow the installation instructions in the README.md file.\n\n\
         To install displayplacer, run:\nbrew install displayplacer",
        lines.join("\n")
    )
}

/// Shows the blocking dependency dialog. Called before any window exists.
pub fn report_startup_failure(err: &AppError) {
    error!("Startup failed: {}", err);
    let description = match err {
        AppError::MissingDependencies(missing) => dependency_error_message(missing),
        other => other.to_string(),
    };

    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Dependency Error")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn setup_platform_window_hooks(app: &crate::AppWindow, app_state: &AppState) {
    use i_slint_backend_winit::WinitWindowAccessor;
    use i_slint_backend_winit::{winit::event::WindowEvent, EventResult};

    let ui_handle = app.as_weak();
    let panel = app_state.panel.clone();

    app.window().on_winit_window_event(move |_window, event| {
        if let WindowEvent::Focused(false) = event {
            let should_close = panel
                .lock()
                .map(|panel| panel.should_close_on_blur())
                .unwrap_or(false);

            if should_close {
                let ui_handle = ui_handle.clone();
                let panel = panel.clone();
                // 非同期で閉じる: winitイベント処理中にウィンドウを隠さない
                slint::Timer::single_shot(std::time::Duration::ZERO, move || {
                    if let Some(ui) = ui_handle.upgrade() {
                        crate::ui::hide_panel(&ui, &panel);
                    }
                });
            }
        }

        EventResult::Propagate
    });
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn setup_platform_window_hooks(_app: &crate::AppWindow, _app_state: &AppState) {
    info!("Focus-loss hiding is not available on this platform");
}

/// Installs the tray icon once the event loop runs; the panel stays hidden
/// until the icon is clicked.
#[cfg(target_os = "macos")]
pub fn configure_startup(app: &crate::AppWindow, app_state: &AppState) -> StartupGuard {
    setup_platform_window_hooks(app, app_state);

    let tray = std::rc::Rc::new(std::cell::RefCell::new(None));
    let tray_slot = tray.clone();
    let ui_handle = app.as_weak();
    let state = app_state.clone();

    slint::Timer::single_shot(std::time::Duration::ZERO, move || {
        crate::platform::hide_dock_icon();
        match crate::services::tray_service::install(ui_handle, state) {
            Ok(icon) => *tray_slot.borrow_mut() = Some(icon),
            Err(e) => {
                error!("{}", e);
                let _ = slint::quit_event_loop();
            }
        }
    });

    StartupGuard { _tray: tray }
}

/// Without a menu bar the panel is shown right away.
#[cfg(not(target_os = "macos"))]
pub fn configure_startup(app: &crate::AppWindow, app_state: &AppState) -> StartupGuard {
    setup_platform_window_hooks(app, app_state);
    crate::platform::hide_dock_icon();
    crate::ui::show_panel(app, app_state);
    StartupGuard {}
}
