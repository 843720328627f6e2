// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                if *size == self.core.window_size {
                    return Some(Task::none());
                }
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                self.core.window_size = *size;
                self.relayout();
                Some(Task::none())
            }

            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::*;
    use crate::features::{HeroSlot, Settings};

    #[test]
    fn resize_moves_hero_endpoints() {
        let mut app = App::from_settings(Settings::default());
        let _ = app.update(Message::WindowResized(Size::new(430.0, 932.0)));

        assert_eq!(app.core.window_size, Size::new(430.0, 932.0));
        let hero = app
            .ui
            .namespace
            .endpoint(app.ui.artwork_id, HeroSlot::Expanded)
            .unwrap();
        assert_eq!(hero.bounds.width, 380.0);
        assert_eq!(app.ui.layout.bar.width, 430.0);
    }
}
