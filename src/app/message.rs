//! Application messages

use std::time::Instant;

use iced::keyboard::{Key, Modifiers};
use iced::widget::image;
use iced::{Point, Size};

use crate::ui::components::Tab;
use crate::ui::widgets::Control;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Sheet ============
    /// Tap on the collapsed bar
    ExpandSheet,
    /// Expanded sheet appeared, start the content reveal
    SheetMounted,
    /// Press on the expanded sheet, a drag may follow
    SheetDragStart,
    /// Close the sheet without a gesture
    DismissSheet,

    // ============ Pointer ============
    /// Cursor moved anywhere in the window
    MouseMoved(Point),
    /// Left button released anywhere in the window
    MouseReleased,

    // ============ Window ============
    /// Frame tick while something animates
    AnimationTick(Instant),
    /// Window resized
    WindowResized(Size),
    /// Main window closed
    WindowClosed,
    /// Keyboard event
    KeyPressed(Key, Modifiers),

    // ============ Chrome ============
    /// Tab bar selection
    SelectTab(Tab),
    /// Pointer entered or left an inert control
    HoverControl(Option<Control>),
    /// Inert control pressed; there is no playback backend
    InertControl(Control),

    // ============ Artwork ============
    /// Cover image decoded from the configured path
    ArtworkLoaded(image::Handle),
    /// Cover image could not be read
    ArtworkFailed(String),

    // ============ Settings ============
    /// Toggle reduce motion and persist it
    ToggleReduceMotion,
    /// Toggle dark mode and persist it
    ToggleDarkMode,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal
            Self::AnimationTick(_) => simple!("AnimationTick"),
            Self::MouseMoved(p) => simple!("MouseMoved", "{:.0},{:.0}", p.x, p.y),
            Self::MouseReleased => simple!("MouseReleased"),

            Self::ExpandSheet => simple!("ExpandSheet"),
            Self::SheetMounted => simple!("SheetMounted"),
            Self::SheetDragStart => simple!("SheetDragStart"),
            Self::DismissSheet => simple!("DismissSheet"),

            Self::WindowResized(s) => simple!("WindowResized", "{}x{}", s.width, s.height),
            Self::WindowClosed => simple!("WindowClosed"),
            Self::KeyPressed(k, m) => simple!("KeyPressed", "{:?}, {:?}", k, m),

            Self::SelectTab(t) => simple!("SelectTab", "{:?}", t),
            Self::HoverControl(c) => simple!("HoverControl", "{:?}", c),
            Self::InertControl(c) => simple!("InertControl", "{:?}", c),

            // Image handles carry the whole file - show nothing
            Self::ArtworkLoaded(_) => simple!("ArtworkLoaded"),
            Self::ArtworkFailed(e) => simple!("ArtworkFailed", "{}", e),

            Self::ToggleReduceMotion => simple!("ToggleReduceMotion"),
            Self::ToggleDarkMode => simple!("ToggleDarkMode"),
        }
    }
}
