//! Theme system for the mini player
//! Dark and light palettes with the red music accent

use iced::color;
use iced::font::Weight;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Fonts
// ============================================================================

/// Title weight; SF Pro reads best at semibold, other system fonts at bold
#[cfg(target_os = "macos")]
pub const SEMIBOLD: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const SEMIBOLD: Weight = Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SHEET: Color = color!(0x1c1c1e);
    pub const BAR: Color = color!(0x2c2c2e);
    pub const CARD: Color = color!(0x2c2c2e);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0x8e8e93);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SHEET: Color = color!(0xffffff);
    pub const BAR: Color = color!(0xf2f2f7);
    pub const CARD: Color = color!(0xe5e5ea);
    pub const TEXT_PRIMARY: Color = color!(0x000000);
    pub const TEXT_SECONDARY: Color = color!(0x8e8e93);
}

/// Selected tab tint and other accents
pub const ACCENT_RED: Color = color!(0xfa2d48);

/// Neutral gray used for separators and inactive tabs
pub const GRAY: Color = color!(0x8e8e93);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn sheet(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SHEET
    } else {
        light::SHEET
    }
}

/// Bar and tab strip material
pub fn bar(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BAR
    } else {
        light::BAR
    }
}

pub fn card(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Scale a color's alpha, clamped to [0, 1]
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Root backdrop
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Collapsed bar and tab strip material
pub fn bar_material(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(bar(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Sheet background morphing out of the bar
///
/// `reveal` blends the bar material into the sheet color.
pub fn sheet_background(radius: f32, reveal: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let from = bar(theme);
        let to = sheet(theme);
        let t = reveal.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        container::Style {
            background: Some(Background::Color(Color::from_rgb(
                mix(from.r, to.r),
                mix(from.g, to.g),
                mix(from.b, to.b),
            ))),
            text_color: Some(text_primary(theme)),
            border: Border {
                radius: radius.max(0.0).into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3 * t),
                offset: Vector::new(0.0, -2.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        }
    }
}

/// 1-unit hairline above the bar bottom
pub fn separator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(GRAY, 0.1))),
        ..Default::default()
    }
}

/// Capsule at the top of the sheet
pub fn grab_handle(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(faded(GRAY, opacity))),
        border: Border {
            radius: 2.5.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pseudo progress bar track
pub fn progress_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(text_secondary(theme), 0.4))),
        border: Border {
            radius: 2.5.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled portion of the pseudo progress bar
pub fn progress_fill(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(text_primary(theme))),
        border: Border {
            radius: 2.5.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder card on the Listen Now page
pub fn placeholder_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round highlight behind an inert control, `strength` from the hover fade
pub fn control_highlight(strength: f32, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(faded(text_primary(theme), 0.12 * strength))),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Icon Styles
// ============================================================================

pub fn icon_primary(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(text_primary(theme)),
    }
}

pub fn icon_tinted(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme, _status| svg::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_differ() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
        assert_ne!(text_primary(&Theme::Dark), text_primary(&Theme::Light));
    }

    #[test]
    fn faded_clamps_opacity() {
        assert_eq!(faded(Color::WHITE, 2.0).a, 1.0);
        assert_eq!(faded(Color::WHITE, -1.0).a, 0.0);
        assert_eq!(faded(GRAY, 0.1).a, 0.1);
    }
}
