//! Layout math for the bar, the sheet and the hero endpoints
//!
//! Everything here is a pure function of the window size and the safe-area
//! insets. All rectangles are in window coordinates so hero frames taken
//! from the bar and from the sheet can be interpolated directly.

use iced::{Point, Rectangle, Size};

use crate::platform::SafeArea;

/// Collapsed bar height
pub const BAR_HEIGHT: f32 = 70.0;
/// Tab strip under the collapsed bar
pub const TAB_BAR_HEIGHT: f32 = 49.0;
/// Bar content insets
pub const BAR_PADDING_HORIZONTAL: f32 = 16.0;
pub const BAR_PADDING_BOTTOM: f32 = 5.0;

pub const THUMBNAIL_SIZE: f32 = 45.0;
pub const THUMBNAIL_RADIUS: f32 = 5.0;
pub const HERO_RADIUS: f32 = 15.0;

/// Horizontal inset of the hero artwork and the player panel
pub const SHEET_PADDING_HORIZONTAL: f32 = 25.0;
/// Vertical gap between grab handle, artwork and panel
pub const SHEET_SPACING: f32 = 15.0;

pub const GRAB_HANDLE: Size = Size::new(40.0, 5.0);

/// Container height under which the hero gets tight vertical padding
const COMPACT_HEIGHT: f32 = 700.0;
/// Panel height under which the transport icons shrink
const REDUCED_ICON_HEIGHT: f32 = 300.0;

/// Vertical padding around the hero artwork
pub fn hero_vertical_padding(container_height: f32) -> f32 {
    if container_height < COMPACT_HEIGHT {
        10.0
    } else {
        30.0
    }
}

/// Side of the square hero artwork
pub fn hero_side(container_width: f32) -> f32 {
    (container_width - 2.0 * SHEET_PADDING_HORIZONTAL).max(0.0)
}

/// Top content padding, measured from the window top
pub fn top_padding(safe_area: SafeArea) -> f32 {
    if safe_area.bottom == 0.0 {
        safe_area.top + 10.0
    } else {
        safe_area.top
    }
}

/// Bottom content padding, measured from the window bottom
pub fn bottom_padding(safe_area: SafeArea) -> f32 {
    if safe_area.bottom == 0.0 {
        10.0
    } else {
        safe_area.bottom
    }
}

/// Transport icon sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconScale {
    Full,
    Reduced,
}

impl IconScale {
    pub fn for_panel_height(height: f32) -> Self {
        if height < REDUCED_ICON_HEIGHT {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    /// Backward / forward glyph size
    pub fn skip(self) -> f32 {
        match self {
            Self::Full => 28.0,
            Self::Reduced => 20.0,
        }
    }

    /// Play / pause glyph size
    pub fn pause(self) -> f32 {
        match self {
            Self::Full => 50.0,
            Self::Reduced => 34.0,
        }
    }
}

/// Horizontal gap between the transport buttons
pub fn control_spacing(panel_width: f32) -> f32 {
    panel_width * 0.18
}

/// Vertical rhythm inside the player panel
pub fn panel_spacing(panel_height: f32) -> f32 {
    panel_height * 0.04
}

/// Height of the title / progress block at the top of the panel
pub fn info_block_height(panel_height: f32) -> f32 {
    panel_height / 2.5
}

/// Resolved frames for one window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub window: Size,
    pub safe_area: SafeArea,
    /// Window minus the safe-area insets
    pub container: Rectangle,
    /// Collapsed bar, above the tab strip
    pub bar: Rectangle,
    pub thumbnail: Rectangle,
    /// Tab strip, extended down over the bottom inset
    pub tab_bar: Rectangle,
    pub grab_handle: Rectangle,
    pub hero: Rectangle,
    /// Space below the hero for track info and transport controls
    pub panel: Rectangle,
    pub hero_padding: f32,
}

impl SheetLayout {
    pub fn compute(window: Size, safe_area: SafeArea) -> Self {
        let width = window.width.max(0.0);
        let height = window.height.max(0.0);

        let container = Rectangle::new(
            Point::new(0.0, safe_area.top),
            Size::new(
                width,
                (height - safe_area.top - safe_area.bottom).max(0.0),
            ),
        );

        // Collapsed chrome, bottom-up
        let tab_top = (height - safe_area.bottom - TAB_BAR_HEIGHT).max(0.0);
        let tab_bar = Rectangle::new(
            Point::new(0.0, tab_top),
            Size::new(width, height - tab_top),
        );
        let bar = Rectangle::new(
            Point::new(0.0, (tab_top - BAR_HEIGHT).max(0.0)),
            Size::new(width, BAR_HEIGHT),
        );
        let thumbnail = Rectangle::new(
            Point::new(
                BAR_PADDING_HORIZONTAL,
                bar.y + (BAR_HEIGHT - BAR_PADDING_BOTTOM - THUMBNAIL_SIZE) / 2.0,
            ),
            Size::new(THUMBNAIL_SIZE, THUMBNAIL_SIZE),
        );

        // Expanded sheet, top-down
        let top = top_padding(safe_area);
        let grab_handle = Rectangle::new(
            Point::new((width - GRAB_HANDLE.width) / 2.0, top),
            GRAB_HANDLE,
        );

        let hero_padding = hero_vertical_padding(container.height);
        let side = hero_side(width);
        let hero = Rectangle::new(
            Point::new(
                SHEET_PADDING_HORIZONTAL,
                grab_handle.y + GRAB_HANDLE.height + SHEET_SPACING + hero_padding,
            ),
            Size::new(side, side),
        );

        let panel_top = hero.y + side + hero_padding + SHEET_SPACING;
        let panel_bottom = height - bottom_padding(safe_area);
        let panel = Rectangle::new(
            Point::new(SHEET_PADDING_HORIZONTAL, panel_top),
            Size::new(side, (panel_bottom - panel_top).max(0.0)),
        );

        Self {
            window: Size::new(width, height),
            safe_area,
            container,
            bar,
            thumbnail,
            tab_bar,
            grab_handle,
            hero,
            panel,
            hero_padding,
        }
    }

    /// Height the dismiss threshold is measured against
    pub fn screen_height(&self) -> f32 {
        self.container.height
    }

    /// Whole-window rectangle, the expanded sheet background
    pub fn full_window(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, self.window)
    }

    pub fn icon_scale(&self) -> IconScale {
        IconScale::for_panel_height(self.panel.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: SafeArea = SafeArea {
        top: 47.0,
        bottom: 34.0,
    };
    const NO_INSETS: SafeArea = SafeArea {
        top: 0.0,
        bottom: 0.0,
    };

    #[test]
    fn scenario_c_hero_padding_by_height() {
        assert_eq!(hero_vertical_padding(650.0), 10.0);
        assert_eq!(hero_vertical_padding(750.0), 30.0);
        assert_eq!(hero_vertical_padding(700.0), 30.0);
    }

    #[test]
    fn scenario_d_icon_scale_by_panel_height() {
        assert_eq!(IconScale::for_panel_height(250.0), IconScale::Reduced);
        assert_eq!(IconScale::for_panel_height(400.0), IconScale::Full);
        assert!(IconScale::Reduced.pause() < IconScale::Full.pause());
        assert!(IconScale::Reduced.skip() < IconScale::Full.skip());
    }

    #[test]
    fn padding_depends_on_home_indicator() {
        assert_eq!(top_padding(PHONE), 47.0);
        assert_eq!(bottom_padding(PHONE), 34.0);

        let notched_no_indicator = SafeArea {
            top: 20.0,
            bottom: 0.0,
        };
        assert_eq!(top_padding(notched_no_indicator), 30.0);
        assert_eq!(bottom_padding(notched_no_indicator), 10.0);
    }

    #[test]
    fn hero_is_square_and_inset() {
        let layout = SheetLayout::compute(Size::new(390.0, 844.0), PHONE);
        assert_eq!(layout.hero.width, 340.0);
        assert_eq!(layout.hero.height, 340.0);
        assert_eq!(layout.hero.x, 25.0);
        // 844 - 47 - 34 = 763, so the roomy padding applies
        assert_eq!(layout.screen_height(), 763.0);
        assert_eq!(layout.hero_padding, 30.0);
        assert_eq!(layout.hero.y, 47.0 + 5.0 + 15.0 + 30.0);
    }

    #[test]
    fn bar_sits_above_tab_strip() {
        let layout = SheetLayout::compute(Size::new(390.0, 844.0), PHONE);
        assert_eq!(layout.bar.y + layout.bar.height, layout.tab_bar.y);
        assert_eq!(layout.tab_bar.y, 844.0 - 34.0 - TAB_BAR_HEIGHT);
        assert_eq!(layout.tab_bar.y + layout.tab_bar.height, 844.0);
        assert!(layout.bar.contains(layout.thumbnail.center()));
        assert_eq!(layout.thumbnail.x, BAR_PADDING_HORIZONTAL);
    }

    #[test]
    fn panel_fills_space_under_hero() {
        let layout = SheetLayout::compute(Size::new(390.0, 844.0), PHONE);
        let expected_top = layout.hero.y + layout.hero.height + 30.0 + 15.0;
        assert_eq!(layout.panel.y, expected_top);
        assert_eq!(layout.panel.y + layout.panel.height, 844.0 - 34.0);
        assert_eq!(layout.icon_scale(), IconScale::Full);
    }

    #[test]
    fn short_window_reduces_icons() {
        let layout = SheetLayout::compute(Size::new(390.0, 640.0), NO_INSETS);
        assert_eq!(layout.hero_padding, 10.0);
        assert!(layout.panel.height < 300.0);
        assert_eq!(layout.icon_scale(), IconScale::Reduced);
    }

    #[test]
    fn degenerate_window_does_not_go_negative() {
        let layout = SheetLayout::compute(Size::new(20.0, 30.0), PHONE);
        assert!(layout.hero.width >= 0.0);
        assert!(layout.panel.height >= 0.0);
        assert!(layout.container.height >= 0.0);
        assert!(layout.bar.y >= 0.0);
    }
}
