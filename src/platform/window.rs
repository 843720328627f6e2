//! Window settings
//!
//! The window is phone-shaped; only the platform-specific block differs.

use iced::Size;

use crate::features::settings::WindowSettings;

/// Smallest window that still fits the bar, the tab strip and a hero
const MIN_SIZE: Size = Size::new(320.0, 480.0);

/// Get platform-specific window settings
pub fn window_settings(window: &WindowSettings) -> iced::window::Settings {
    iced::window::Settings {
        size: initial_size(window),
        min_size: Some(MIN_SIZE),
        resizable: true,
        #[cfg(target_os = "linux")]
        platform_specific: iced::window::settings::PlatformSpecific {
            application_id: "miniplayer".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Configured size, clamped to the minimum
pub fn initial_size(window: &WindowSettings) -> Size {
    let width = if window.width.is_finite() {
        window.width.max(MIN_SIZE.width)
    } else {
        MIN_SIZE.width
    };
    let height = if window.height.is_finite() {
        window.height.max(MIN_SIZE.height)
    } else {
        MIN_SIZE.height
    };
    Size::new(width, height)
}
