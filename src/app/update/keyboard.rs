// src/app/update/keyboard.rs
//! Keyboard shortcut handlers

use iced::Task;
use iced::keyboard::{Key, Modifiers, key::Named};

use crate::app::message::Message;
use crate::app::state::App;

/// Map a key press to the message it triggers
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::DismissSheet),
        Key::Named(Named::Space) | Key::Named(Named::Enter) => Some(Message::ExpandSheet),
        Key::Character(c) if c.eq_ignore_ascii_case("m") => Some(Message::ToggleReduceMotion),
        Key::Character(c) if c.eq_ignore_ascii_case("d") => Some(Message::ToggleDarkMode),
        _ => None,
    }
}

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => match shortcut(key, *modifiers) {
                Some(action) => Some(self.update(action)),
                None => Some(Task::none()),
            },
            _ => None,
        }
    }
}
