//! Collapsed now-playing bar
//!
//! The artwork slot is left empty: the hero layer draws the artwork at
//! the thumbnail frame so the same element can travel into the sheet.

use std::sync::LazyLock;

use iced::widget::{Space, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Font, Length, Padding, mouse};

use crate::app::Message;
use crate::features::NowPlaying;
use crate::features::layout::{
    BAR_HEIGHT, BAR_PADDING_BOTTOM, BAR_PADDING_HORIZONTAL, THUMBNAIL_SIZE,
};
use crate::ui::animation::HoverFade;
use crate::ui::widgets::{Control, playback_controls};
use crate::ui::{icons, theme};

const TITLE_PADDING: f32 = 15.0;
const TITLE_SIZE: f32 = 15.0;
const GHOST_ICON: f32 = 22.0;

static PAUSE: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::PAUSE.as_bytes()));
static FORWARD: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::FORWARD.as_bytes()));

fn title<'a>(track: &'a NowPlaying, opacity: f32) -> Element<'a, Message> {
    container(
        text(&track.title)
            .size(TITLE_SIZE)
            .font(Font {
                weight: theme::SEMIBOLD,
                ..Default::default()
            })
            .wrapping(text::Wrapping::None)
            .style(move |theme| text::Style {
                color: Some(theme::faded(theme::text_primary(theme), opacity)),
            }),
    )
    .padding(Padding::new(0.0).left(TITLE_PADDING).right(TITLE_PADDING))
    .width(Length::Fill)
    .clip(true)
    .into()
}

fn frame<'a>(content: impl Into<Element<'a, Message>>) -> iced::widget::Container<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(BAR_HEIGHT)
        .padding(
            Padding::new(0.0)
                .left(BAR_PADDING_HORIZONTAL)
                .right(BAR_PADDING_HORIZONTAL)
                .bottom(BAR_PADDING_BOTTOM),
        )
        .center_y(BAR_HEIGHT)
}

/// Interactive bar: a press anywhere outside the controls expands the sheet
pub fn view<'a>(track: &'a NowPlaying, hover: &HoverFade<Control>) -> Element<'a, Message> {
    let content = row![
        Space::new().width(THUMBNAIL_SIZE).height(THUMBNAIL_SIZE),
        title(track, 1.0),
        playback_controls::bar_controls(hover, Message::InertControl, Message::HoverControl),
    ]
    .align_y(Alignment::Center);

    mouse_area(frame(content).style(theme::bar_material))
        .on_press(Message::ExpandSheet)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Non-interactive copy drawn on the sheet background while it fades out
pub fn ghost<'a>(track: &'a NowPlaying, opacity: f32) -> Element<'a, Message> {
    let icon = move |handle: &svg::Handle| {
        svg(handle.clone())
            .width(GHOST_ICON)
            .height(GHOST_ICON)
            .style(move |theme, _status| svg::Style {
                color: Some(theme::faded(theme::text_primary(theme), opacity)),
            })
    };

    // Same geometry as the live controls so nothing shifts when they swap
    let slot = GHOST_ICON + 16.0;
    let content = row![
        Space::new().width(THUMBNAIL_SIZE).height(THUMBNAIL_SIZE),
        title(track, opacity),
        container(icon(&PAUSE)).center_x(slot).center_y(slot),
        Space::new().width(5.0),
        container(icon(&FORWARD)).center_x(slot).center_y(slot),
    ]
    .align_y(Alignment::Center);

    frame(content).into()
}
