//! Platform abstraction layer
//!
//! # Structure
//! - `display.rs` - Device metrics (screen corner radius, safe-area insets)
//! - `window.rs` - Window settings that differ per platform

pub mod display;
pub mod window;

pub use display::{ConfiguredDisplay, DisplayMetrics, SafeArea};
