// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod modes;
mod platform;
mod selection;
mod services;
mod startup;
mod state;
mod tools;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    #[cfg(debug_assertions)]
    logger.filter_level(log::LevelFilter::Debug);
    logger.init();

    let paths = tools::ToolPaths::detect();
    if let Err(e) = startup::check_dependencies(&paths) {
        startup::report_startup_failure(&e);
        std::process::exit(1);
    }

    let app = AppWindow::new()?;
    let app_state = state::AppState::new(paths);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);
    let _startup = startup::configure_startup(&app, &app_state);

    slint::run_event_loop_until_quit()?;

    Ok(())
}
