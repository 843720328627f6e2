//! MiniPlayer - a now-playing bar that expands into a full player sheet
//! Built with iced, modelled on the Apple Music mini player

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod platform;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Daemon so the window is opened explicitly with settings-driven size;
    // the app exits when that window closes
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
