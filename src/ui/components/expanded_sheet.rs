//! Expanded player sheet
//!
//! Built from absolutely positioned layers so every frame can follow the
//! transition: the background hero, the grab handle and the player panel.
//! The artwork hero is drawn separately, above all of them.

use iced::widget::{Space, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Element, Font, Length, Padding, Point, Rectangle, mouse};

use crate::app::Message;
use crate::features::layout::{self, IconScale};
use crate::features::track::format_time;
use crate::features::{HeroFrame, NowPlaying};
use crate::ui::animation::HoverFade;
use crate::ui::components::mini_player;
use crate::ui::primitives::positioned;
use crate::ui::widgets::{Control, playback_controls};
use crate::ui::theme;

const TITLE_SIZE: f32 = 20.0;
const ARTIST_SIZE: f32 = 16.0;
const CAPTION_SIZE: f32 = 12.0;
const PROGRESS_HEIGHT: f32 = 5.0;
const MORE_ICON: f32 = 18.0;

/// What the sheet needs from the app for one frame
#[derive(Debug, Clone, Copy)]
pub struct SheetFrame {
    /// Interpolated background frame, drag offset already applied
    pub background: HeroFrame,
    pub grab_handle: Rectangle,
    pub panel: Rectangle,
    /// Height the slide-in offsets are measured against
    pub screen_height: f32,
    pub reveal: f32,
    pub drag_offset: f32,
    /// Accepts drags; otherwise a press re-expands a collapsing sheet
    pub expanded: bool,
    pub dragging: bool,
    pub icon_scale: IconScale,
}

impl SheetFrame {
    /// Vertical shift applied to content that slides in from below
    fn slide(&self) -> f32 {
        self.drag_offset + (1.0 - self.reveal.clamp(0.0, 1.0)) * self.screen_height
    }
}

fn shifted(rect: Rectangle, dy: f32) -> Rectangle {
    Rectangle::new(Point::new(rect.x, rect.y + dy), rect.size())
}

pub fn view<'a>(
    frame: SheetFrame,
    track: &'a NowPlaying,
    hover: &HoverFade<Control>,
) -> Element<'a, Message> {
    let reveal = frame.reveal.clamp(0.0, 1.0);

    // Background hero with the bar content fading out on top
    let background = container(mini_player::ghost(track, 1.0 - reveal))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_top(Length::Fill)
        .style(theme::sheet_background(
            frame.background.corner_radius,
            reveal,
        ));

    let background: Element<'a, Message> = if frame.expanded {
        mouse_area(background)
            .on_press(Message::SheetDragStart)
            .interaction(if frame.dragging {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Grab
            })
            .into()
    } else {
        mouse_area(background)
            .on_press(Message::ExpandSheet)
            .interaction(mouse::Interaction::Pointer)
            .into()
    };

    let handle = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::grab_handle(reveal));

    let slide = frame.slide();
    let layers = stack![
        positioned(frame.background.bounds, background),
        positioned(shifted(frame.grab_handle, slide), handle),
        positioned(shifted(frame.panel, slide), player_panel(&frame, track, hover)),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    if frame.expanded {
        // Nothing below the sheet reacts while it is up
        opaque(layers)
    } else {
        layers.into()
    }
}

/// Track info, pseudo progress and transport controls
fn player_panel<'a>(
    frame: &SheetFrame,
    track: &'a NowPlaying,
    hover: &HoverFade<Control>,
) -> Element<'a, Message> {
    let panel = frame.panel;
    let spacing = layout::panel_spacing(panel.height);

    let heading = column![
        text(&track.title).size(TITLE_SIZE).font(Font {
            weight: theme::SEMIBOLD,
            ..Default::default()
        }),
        text(&track.artist)
            .size(ARTIST_SIZE)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ]
    .spacing(4)
    .width(Length::Fill);

    let more = playback_controls::control_button(
        Control::More,
        MORE_ICON,
        hover,
        Message::InertControl,
        Message::HoverControl,
    );

    let progress = progress_bar(panel.width, track.progress());

    let caption = |label: String| {
        text(label)
            .size(CAPTION_SIZE)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
    };
    let times = row![
        caption(format_time(track.position)),
        Space::new().width(Length::Fill),
        caption(format_time(track.duration)),
    ];

    let info = column![
        row![heading, more].spacing(15).align_y(Alignment::Center),
        container(progress).padding(Padding::new(0.0).top(spacing)),
        times,
    ]
    .spacing(spacing)
    .height(layout::info_block_height(panel.height));

    let transport = container(playback_controls::transport_row(
        frame.icon_scale,
        layout::control_spacing(panel.width),
        hover,
        Message::InertControl,
        Message::HoverControl,
    ))
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    column![info, transport]
        .spacing(spacing)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn progress_bar<'a>(width: f32, fraction: f32) -> Element<'a, Message> {
    let filled = (width * fraction.clamp(0.0, 1.0)).max(0.0);

    stack![
        container(Space::new().width(Length::Fill).height(PROGRESS_HEIGHT))
            .width(Length::Fill)
            .style(theme::progress_track),
        container(Space::new().width(filled).height(PROGRESS_HEIGHT))
            .style(theme::progress_fill),
    ]
    .width(Length::Fill)
    .height(PROGRESS_HEIGHT)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(reveal: f32, drag_offset: f32) -> SheetFrame {
        SheetFrame {
            background: HeroFrame::new(
                Rectangle::new(Point::ORIGIN, iced::Size::new(390.0, 844.0)),
                0.0,
            ),
            grab_handle: Rectangle::new(Point::new(175.0, 47.0), layout::GRAB_HANDLE),
            panel: Rectangle::new(Point::new(25.0, 500.0), iced::Size::new(340.0, 300.0)),
            screen_height: 763.0,
            reveal,
            drag_offset,
            expanded: true,
            dragging: false,
            icon_scale: IconScale::Full,
        }
    }

    #[test]
    fn content_starts_one_screen_below() {
        assert_eq!(frame(0.0, 0.0).slide(), 763.0);
        assert_eq!(frame(1.0, 0.0).slide(), 0.0);
    }

    #[test]
    fn drag_moves_revealed_content() {
        assert_eq!(frame(1.0, 120.0).slide(), 120.0);
        assert_eq!(shifted(frame(1.0, 0.0).panel, 120.0).y, 620.0);
    }
}
