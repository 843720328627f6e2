// src/app/update/navigation.rs
//! Tab, control and artwork message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle chrome messages: tabs, inert controls and the cover image
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectTab(tab) => {
                if self.ui.active_tab != *tab {
                    tracing::debug!("Selected tab {:?}", tab);
                    self.ui.active_tab = *tab;
                }
                Some(Task::none())
            }

            Message::HoverControl(control) => {
                self.ui.control_hover.set(*control);
                Some(Task::none())
            }

            Message::InertControl(control) => {
                tracing::debug!("{:?} pressed, no playback backend attached", control);
                Some(Task::none())
            }

            Message::ArtworkLoaded(handle) => {
                tracing::info!("Artwork loaded");
                self.core.artwork = Some(handle.clone());
                Some(Task::none())
            }

            Message::ArtworkFailed(error) => {
                tracing::warn!("Failed to load artwork, using placeholder: {}", error);
                self.core.artwork = None;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::ui::components::Tab;
    use crate::ui::widgets::Control;

    #[test]
    fn select_tab_switches_page() {
        let mut app = App::from_settings(Settings::default());
        assert_eq!(app.ui.active_tab, Tab::ListenNow);
        let _ = app.update(Message::SelectTab(Tab::Search));
        assert_eq!(app.ui.active_tab, Tab::Search);
    }

    #[test]
    fn hovering_a_control_starts_its_fade() {
        let mut app = App::from_settings(Settings::default());
        let _ = app.update(Message::HoverControl(Some(Control::Pause)));
        assert!(app.ui.control_hover.is_animating());
        assert!(app.ui.has_active_animations());
    }

    #[test]
    fn failed_artwork_keeps_placeholder() {
        let mut app = App::from_settings(Settings::default());
        let _ = app.update(Message::ArtworkFailed("missing".to_string()));
        assert!(app.core.artwork.is_none());
    }
}
