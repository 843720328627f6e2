//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::artwork;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Settings drive window size, device metrics and motion
        let settings = crate::features::Settings::load();
        let window_settings = crate::platform::window::window_settings(&settings.window);
        let artwork_path = settings.artwork_path.clone();

        let app = Self::from_settings(settings);

        // 2. Open main window
        let (window_id, open_window) = iced::window::open(window_settings);
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 3. Load the cover image if one is configured
        let load_artwork = match artwork_path {
            Some(path) => Task::perform(artwork::load_artwork_async(path), |result| match result {
                Ok(handle) => Message::ArtworkLoaded(handle),
                Err(e) => Message::ArtworkFailed(e),
            }),
            None => Task::none(),
        };

        (app, Task::batch([open_window.discard(), load_artwork]))
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the current track
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("MiniPlayer - {}", self.core.track.title)
    }

    /// Subscriptions for animation frames, pointer, keyboard and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 2. Window events
        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 3. Animation frames, only while something moves
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.sheet.is_animating(),
            self.ui.control_hover.is_animating(),
        ) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 4. Pointer events, also when a widget captured them, so a drag
        // keeps tracking over the controls and ends wherever it is released
        let mouse_sub = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::MouseMoved(position))
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                Some(Message::MouseReleased)
            }
            _ => None,
        });

        iced::Subscription::batch([
            keyboard_sub,
            close_event_sub,
            resize_sub,
            animation_sub,
            mouse_sub,
        ])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(sheet_animating: bool, hover_animating: bool) -> bool {
        sheet_animating || hover_animating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frames_only_when_needed {
        use super::*;

        #[test]
        fn idle_app_requests_no_frames() {
            assert!(
                !needs_animation_subscription(false, false),
                "No frame subscription when nothing animates"
            );
        }

        #[test]
        fn any_animation_requests_frames() {
            assert!(needs_animation_subscription(true, false));
            assert!(needs_animation_subscription(false, true));
            assert!(needs_animation_subscription(true, true));
        }
    }
}
