// src/app/update/sheet.rs
//! Sheet transition and drag gesture handlers

use std::time::Instant;

use iced::{Point, Task};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Outcome, SheetEvent};

impl App {
    /// Handle sheet-related messages
    pub fn handle_sheet(&mut self, message: &Message) -> Option<Task<Message>> {
        let now = Instant::now();
        match message {
            Message::ExpandSheet => Some(self.sheet_event(SheetEvent::Expand, now)),

            Message::SheetMounted => Some(self.sheet_event(SheetEvent::Mounted, now)),

            Message::DismissSheet => {
                self.ui.drag_origin = None;
                Some(self.sheet_event(SheetEvent::Dismiss, now))
            }

            Message::SheetDragStart => {
                self.begin_drag();
                Some(Task::none())
            }

            Message::MouseMoved(position) => {
                self.core.mouse_position = *position;
                if let Some(origin) = self.ui.drag_origin {
                    let translation_y = position.y - origin.y;
                    return Some(self.sheet_event(SheetEvent::DragChanged { translation_y }, now));
                }
                Some(Task::none())
            }

            Message::MouseReleased => {
                if self.ui.drag_origin.take().is_some() {
                    let screen_height = self.ui.layout.screen_height();
                    return Some(self.sheet_event(SheetEvent::DragEnded { screen_height }, now));
                }
                Some(Task::none())
            }

            Message::AnimationTick(instant) => {
                self.ui.control_hover.tick(*instant);
                Some(self.sheet_event(SheetEvent::Tick, *instant))
            }

            _ => None,
        }
    }

    /// Remember where a drag started, keeping any offset still on screen
    fn begin_drag(&mut self) {
        let sheet = &self.ui.sheet;
        if !sheet.is_expanded() || !sheet.is_content_revealed() {
            return;
        }
        let position = self.core.mouse_position;
        self.ui.drag_origin = Some(Point::new(
            position.x,
            position.y - self.ui.sheet.drag_offset(),
        ));
        tracing::debug!(
            "Sheet drag started at y={:.0} (offset {:.0})",
            position.y,
            self.ui.sheet.drag_offset()
        );
    }

    /// Feed one event to the controller and react to what it did
    pub(crate) fn sheet_event(&mut self, event: SheetEvent, now: Instant) -> Task<Message> {
        let offset = self.ui.sheet.drag_offset();
        let outcome = self.ui.sheet.handle(event, now);

        match outcome {
            Outcome::ExpandStarted => {
                tracing::info!("Sheet expanding");
                // The sheet is on screen from the next frame; start its reveal
                return Task::done(Message::SheetMounted);
            }
            Outcome::DismissCommitted => {
                tracing::info!("Sheet dismissed by drag at offset {:.0}", offset);
                self.ui.control_hover.clear();
            }
            Outcome::DismissCancelled => {
                let threshold = self
                    .ui
                    .sheet
                    .config()
                    .commit_threshold(self.ui.layout.screen_height());
                tracing::info!(
                    "Sheet drag cancelled at offset {:.0} (threshold {:.0})",
                    offset,
                    threshold
                );
            }
            Outcome::Dismissed => {
                tracing::info!("Sheet dismissed");
                self.ui.control_hover.clear();
            }
            Outcome::SettledExpanded => tracing::debug!("Sheet settled expanded"),
            Outcome::SettledCollapsed => tracing::debug!("Sheet settled collapsed"),
            Outcome::Updated | Outcome::Ignored => {}
        }

        Task::none()
    }
}
