// src/app/state.rs
//! Application state definitions

use std::time::Instant;

use iced::widget::image;
use iced::{Point, Rectangle, Size};

use crate::features::{
    HeroFrame, HeroProgress, HeroSlot, NowPlaying, Settings, SharedAnimationNamespace,
    SharedElementId, SheetLayout, TransitionConfig, TransitionController, layout,
};
use crate::platform::{ConfiguredDisplay, DisplayMetrics};
use crate::ui::animation::HoverFade;
use crate::ui::components::Tab;
use crate::ui::widgets::Control;

/// Main application state
pub struct App {
    /// Settings, device metrics, window and track data
    pub core: CoreState,
    /// Sheet transition, hero registry and chrome state
    pub ui: UiState,
}

/// Core state shared by every view
pub struct CoreState {
    pub settings: Settings,
    /// Device corner radius and safe-area insets
    pub display: Box<dyn DisplayMetrics>,
    pub window_size: Size,
    /// Last known cursor position, drag gestures start from here
    pub mouse_position: Point,
    pub track: NowPlaying,
    /// Decoded cover image, `None` draws the placeholder
    pub artwork: Option<image::Handle>,
}

impl CoreState {
    pub fn new(settings: Settings, display: Box<dyn DisplayMetrics>) -> Self {
        let window_size = crate::platform::window::initial_size(&settings.window);
        Self {
            settings,
            display,
            window_size,
            mouse_position: Point::ORIGIN,
            track: NowPlaying::default(),
            artwork: None,
        }
    }
}

/// UI state: the sheet and everything drawn around it
pub struct UiState {
    pub sheet: TransitionController,
    /// Endpoint frames for the shared artwork and background
    pub namespace: SharedAnimationNamespace,
    pub artwork_id: SharedElementId,
    pub background_id: SharedElementId,
    pub layout: SheetLayout,
    /// Cursor position minus the sheet offset when the drag began
    pub drag_origin: Option<Point>,
    pub active_tab: Tab,
    pub control_hover: HoverFade<Control>,
}

impl UiState {
    pub fn new(config: TransitionConfig, layout: SheetLayout, now: Instant) -> Self {
        Self {
            sheet: TransitionController::new(config, now),
            namespace: SharedAnimationNamespace::new(),
            artwork_id: SharedElementId::unique(),
            background_id: SharedElementId::unique(),
            layout,
            drag_origin: None,
            active_tab: Tab::default(),
            control_hover: HoverFade::default(),
        }
    }

    /// True while the frame subscription is needed
    pub fn has_active_animations(&self) -> bool {
        self.sheet.is_animating() || self.control_hover.is_animating()
    }

    /// Progress values driving every hero frame this frame
    pub fn hero_progress(&self) -> HeroProgress {
        HeroProgress {
            geometry: self.sheet.hero_progress(),
            shape: self.sheet.reveal_progress(),
            expanded_offset_y: self.sheet.drag_offset(),
        }
    }

    /// Where the artwork is drawn right now
    pub fn artwork_frame(&self) -> Option<HeroFrame> {
        self.namespace.resolve(self.artwork_id, self.hero_progress())
    }

    /// Where the sheet background is drawn right now
    pub fn background_frame(&self) -> Option<HeroFrame> {
        self.namespace
            .resolve(self.background_id, self.hero_progress())
    }
}

/// Transition timing for the current motion preference
pub fn transition_config(settings: &Settings) -> TransitionConfig {
    if settings.display.reduce_motion {
        TransitionConfig::reduced_motion()
    } else {
        TransitionConfig::default()
    }
}

impl App {
    /// Build the state from explicit settings and metrics
    pub fn with_settings(settings: Settings, display: Box<dyn DisplayMetrics>) -> Self {
        let config = transition_config(&settings);
        let core = CoreState::new(settings, display);
        let layout = SheetLayout::compute(core.window_size, core.display.safe_area());
        let ui = UiState::new(config, layout, Instant::now());

        let mut app = Self { core, ui };
        app.relayout();
        app
    }

    /// Build the state with metrics taken from the settings
    pub fn from_settings(settings: Settings) -> Self {
        let display = Box::new(ConfiguredDisplay::from_settings(&settings.device));
        Self::with_settings(settings, display)
    }

    /// Recompute frames for the current window and re-register hero endpoints
    pub fn relayout(&mut self) {
        let layout = SheetLayout::compute(self.core.window_size, self.core.display.safe_area());
        let device_radius = self.core.display.resolved_corner_radius();

        let ui = &mut self.ui;
        ui.layout = layout;

        ui.namespace.register(
            ui.artwork_id,
            HeroSlot::Collapsed,
            HeroFrame::new(layout.thumbnail, layout::THUMBNAIL_RADIUS),
        );
        ui.namespace.register(
            ui.artwork_id,
            HeroSlot::Expanded,
            HeroFrame::new(layout.hero, layout::HERO_RADIUS),
        );

        ui.namespace.register(
            ui.background_id,
            HeroSlot::Collapsed,
            HeroFrame::new(layout.bar, 0.0),
        );
        ui.namespace.register(
            ui.background_id,
            HeroSlot::Expanded,
            HeroFrame::new(layout.full_window(), device_radius),
        );
    }

    /// Bar rectangle in window coordinates
    pub fn bar_bounds(&self) -> Rectangle {
        self.ui.layout.bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SafeArea;

    #[derive(Debug)]
    struct FixedDisplay {
        radius: Option<f32>,
        safe_area: SafeArea,
    }

    impl DisplayMetrics for FixedDisplay {
        fn corner_radius(&self) -> Option<f32> {
            self.radius
        }

        fn safe_area(&self) -> SafeArea {
            self.safe_area
        }
    }

    fn app_with(radius: Option<f32>) -> App {
        App::with_settings(
            Settings::default(),
            Box::new(FixedDisplay {
                radius,
                safe_area: SafeArea {
                    top: 47.0,
                    bottom: 34.0,
                },
            }),
        )
    }

    #[test]
    fn collapsed_artwork_sits_in_the_bar() {
        let app = app_with(Some(40.0));
        let frame = app.ui.artwork_frame().unwrap();
        assert_eq!(frame.bounds, app.ui.layout.thumbnail);
        assert_eq!(frame.corner_radius, layout::THUMBNAIL_RADIUS);
        assert!(app.bar_bounds().contains(frame.bounds.center()));
    }

    #[test]
    fn background_starts_as_the_bar() {
        let app = app_with(Some(40.0));
        let frame = app.ui.background_frame().unwrap();
        assert_eq!(frame.bounds, app.ui.layout.bar);
        assert_eq!(frame.corner_radius, 0.0);
        assert_eq!(
            app.ui.namespace
                .endpoint(app.ui.background_id, HeroSlot::Expanded)
                .unwrap()
                .corner_radius,
            40.0
        );
    }

    #[test]
    fn missing_device_radius_uses_square_corners() {
        let app = app_with(None);
        let expanded = app
            .ui
            .namespace
            .endpoint(app.ui.background_id, HeroSlot::Expanded)
            .unwrap();
        assert_eq!(expanded.corner_radius, 0.0);
    }

    #[test]
    fn relayout_follows_window_size() {
        let mut app = app_with(None);
        app.core.window_size = Size::new(430.0, 932.0);
        app.relayout();
        let hero = app
            .ui
            .namespace
            .endpoint(app.ui.artwork_id, HeroSlot::Expanded)
            .unwrap();
        assert_eq!(hero.bounds.width, 380.0);
    }

    #[test]
    fn reduce_motion_picks_zero_durations() {
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        assert_eq!(transition_config(&settings), TransitionConfig::reduced_motion());
        assert_eq!(
            transition_config(&Settings::default()),
            TransitionConfig::default()
        );
    }
}
