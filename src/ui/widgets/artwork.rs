//! Cover art at an arbitrary frame and corner radius
//!
//! Fills whatever size it is given, so the hero layer can drive the
//! frame. Without a loaded image a gradient placeholder is drawn.

use std::sync::LazyLock;

use iced::widget::{container, image, svg};
use iced::{Background, Border, Color, ContentFit, Element, Length, Radians};

use crate::ui::icons;

static MUSIC_ICON: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::MUSIC.as_bytes()));

/// Artwork element; `side` and `radius` are the current interpolated frame
pub fn view<'a, Message: 'a>(
    handle: Option<&image::Handle>,
    side: f32,
    radius: f32,
) -> Element<'a, Message> {
    let radius = radius.max(0.0);

    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .border_radius(radius)
            .into(),
        None => placeholder(side, radius),
    }
}

fn placeholder<'a, Message: 'a>(side: f32, radius: f32) -> Element<'a, Message> {
    let glyph = (side * 0.4).max(0.0);

    container(
        svg(MUSIC_ICON.clone())
            .width(glyph)
            .height(glyph)
            .style(|_theme, _status| svg::Style {
                color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.85)),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(move |_theme| container::Style {
        background: Some(Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(Radians(std::f32::consts::PI * 0.75))
                .add_stop(0.0, Color::from_rgb(0.98, 0.18, 0.28))
                .add_stop(1.0, Color::from_rgb(0.45, 0.12, 0.55)),
        ))),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
