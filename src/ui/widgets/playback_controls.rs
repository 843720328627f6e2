//! Transport controls for the bar and the sheet
//!
//! There is no playback backend, so every button is inert: a press only
//! reports which control was hit. Hover feedback comes from a shared
//! [`HoverFade`].

use std::sync::LazyLock;

use iced::widget::{container, mouse_area, row, svg};
use iced::{Alignment, Element, mouse};

use crate::features::IconScale;
use crate::ui::animation::HoverFade;
use crate::ui::{icons, theme};

static PAUSE: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::PAUSE.as_bytes()));
static FORWARD: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::FORWARD.as_bytes()));
static BACKWARD: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::BACKWARD.as_bytes()));
static ELLIPSIS: LazyLock<svg::Handle> =
    LazyLock::new(|| svg::Handle::from_memory(icons::ELLIPSIS.as_bytes()));

/// Every inert control on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    BarPause,
    BarForward,
    Backward,
    Pause,
    Forward,
    More,
}

impl Control {
    fn icon(self) -> svg::Handle {
        match self {
            Self::BarPause | Self::Pause => PAUSE.clone(),
            Self::BarForward | Self::Forward => FORWARD.clone(),
            Self::Backward => BACKWARD.clone(),
            Self::More => ELLIPSIS.clone(),
        }
    }
}

/// Bar glyph size
const BAR_ICON: f32 = 22.0;
/// Gap between the two bar buttons
const BAR_SPACING: f32 = 5.0;

/// One inert, hover-highlighted icon button
pub fn control_button<'a, Message: Clone + 'a>(
    control: Control,
    icon_size: f32,
    hover: &HoverFade<Control>,
    on_press: impl Fn(Control) -> Message,
    on_hover: impl Fn(Option<Control>) -> Message,
) -> Element<'a, Message> {
    let hit = icon_size + 16.0;
    let strength = hover.progress(control);

    let glyph = container(
        svg(control.icon())
            .width(icon_size)
            .height(icon_size)
            .style(theme::icon_primary),
    )
    .width(hit)
    .height(hit)
    .center_x(hit)
    .center_y(hit)
    .style(theme::control_highlight(strength, hit / 2.0));

    mouse_area(glyph)
        .on_press(on_press(control))
        .on_enter(on_hover(Some(control)))
        .on_exit(on_hover(None))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Pause and forward at the trailing edge of the collapsed bar
pub fn bar_controls<'a, Message: Clone + 'a>(
    hover: &HoverFade<Control>,
    on_press: impl Fn(Control) -> Message + Copy,
    on_hover: impl Fn(Option<Control>) -> Message + Copy,
) -> Element<'a, Message> {
    row![
        control_button(Control::BarPause, BAR_ICON, hover, on_press, on_hover),
        control_button(Control::BarForward, BAR_ICON, hover, on_press, on_hover),
    ]
    .spacing(BAR_SPACING)
    .align_y(Alignment::Center)
    .into()
}

/// Backward, pause, forward with the sheet's dynamic spacing
pub fn transport_row<'a, Message: Clone + 'a>(
    scale: IconScale,
    spacing: f32,
    hover: &HoverFade<Control>,
    on_press: impl Fn(Control) -> Message + Copy,
    on_hover: impl Fn(Option<Control>) -> Message + Copy,
) -> Element<'a, Message> {
    row![
        control_button(Control::Backward, scale.skip(), hover, on_press, on_hover),
        control_button(Control::Pause, scale.pause(), hover, on_press, on_hover),
        control_button(Control::Forward, scale.skip(), hover, on_press, on_hover),
    ]
    .spacing(spacing)
    .align_y(Alignment::Center)
    .into()
}
