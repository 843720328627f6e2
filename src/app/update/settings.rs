// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, transition_config};

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleReduceMotion => {
                let display_settings = &mut self.core.settings.display;
                display_settings.reduce_motion = !display_settings.reduce_motion;
                tracing::info!("Reduce motion: {}", display_settings.reduce_motion);

                self.ui
                    .sheet
                    .set_config(transition_config(&self.core.settings));
                self.persist_settings();
                Some(Task::none())
            }

            Message::ToggleDarkMode => {
                let display_settings = &mut self.core.settings.display;
                display_settings.dark_mode = !display_settings.dark_mode;
                tracing::info!("Dark mode: {}", display_settings.dark_mode);
                self.persist_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn persist_settings(&self) {
        // Tests must not touch the user's config directory
        if cfg!(test) {
            return;
        }
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Settings, TransitionConfig};

    #[test]
    fn reduce_motion_swaps_transition_timing() {
        let mut app = App::from_settings(Settings::default());
        let _ = app.update(Message::ToggleReduceMotion);
        assert!(app.core.settings.display.reduce_motion);
        assert_eq!(
            *app.ui.sheet.config(),
            TransitionConfig::reduced_motion()
        );

        // With zero durations a tap lands straight on the expanded sheet
        let _ = app.update(Message::ExpandSheet);
        assert!(app.ui.sheet.is_expanded());
        assert!(!app.ui.sheet.is_animating());

        let _ = app.update(Message::ToggleReduceMotion);
        assert_eq!(*app.ui.sheet.config(), TransitionConfig::default());
    }

    #[test]
    fn dark_mode_toggles_theme() {
        let mut app = App::from_settings(Settings::default());
        let window = iced::window::Id::unique();
        assert_eq!(app.theme(window), iced::Theme::Dark);
        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(window), iced::Theme::Light);
    }
}
