// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, Stack, container};
use iced::{Element, Fill, Point, Rectangle, Size};

use super::App;
use super::message::Message;
use crate::features::layout::BAR_PADDING_BOTTOM;
use crate::ui::components::{SheetFrame, expanded_sheet, mini_player, tab_bar};
use crate::ui::primitives::positioned;
use crate::ui::{pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    ///
    /// Layers, bottom to top: page backdrop, collapsed bar, tab strip,
    /// sheet, then the artwork hero, which is drawn exactly once.
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let layout = &self.ui.layout;
        let sheet = &self.ui.sheet;

        let mut layers: Vec<Element<'_, Message>> = Vec::with_capacity(5);

        // 1. Page behind the chrome
        layers.push(pages::listen_now::view(
            self.ui.active_tab,
            layout.window.width,
            layout.safe_area.top,
            layout.window.height - layout.tab_bar.y,
        ));

        // 2. Live bar; once the sheet is on screen its ghost copy takes over
        if !sheet.is_sheet_visible() {
            let bar = self.bar_bounds();
            layers.push(
                positioned(bar, mini_player::view(&self.core.track, &self.ui.control_hover))
                    .into(),
            );

            let hairline = Rectangle::new(
                Point::new(bar.x, bar.y + bar.height - BAR_PADDING_BOTTOM),
                Size::new(bar.width, 1.0),
            );
            layers.push(
                positioned(
                    hairline,
                    container(Space::new())
                        .width(Fill)
                        .height(Fill)
                        .style(theme::separator),
                )
                .into(),
            );
        }

        // 3. Tab strip, gone while the sheet is up
        if !sheet.is_expanded() {
            layers.push(
                positioned(
                    layout.tab_bar,
                    tab_bar::view(self.ui.active_tab, layout.safe_area.bottom),
                )
                .into(),
            );
        }

        // 4. Sheet background, grab handle and player panel
        let background = sheet
            .is_sheet_visible()
            .then(|| self.ui.background_frame())
            .flatten();
        if let Some(background) = background {
            let frame = SheetFrame {
                background,
                grab_handle: layout.grab_handle,
                panel: layout.panel,
                screen_height: layout.window.height,
                reveal: sheet.reveal_progress(),
                drag_offset: sheet.drag_offset(),
                expanded: sheet.is_expanded(),
                dragging: sheet.is_dragging(),
                icon_scale: layout.icon_scale(),
            };
            layers.push(expanded_sheet::view(
                frame,
                &self.core.track,
                &self.ui.control_hover,
            ));
        }

        // 5. Artwork hero, interpolated between thumbnail and sheet
        if let Some(artwork) = self.ui.artwork_frame() {
            layers.push(
                positioned(
                    artwork.bounds,
                    widgets::artwork::view(
                        self.core.artwork.as_ref(),
                        artwork.bounds.width,
                        artwork.corner_radius,
                    ),
                )
                .into(),
            );
        }

        container(Stack::with_children(layers).width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}
