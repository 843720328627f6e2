//! Reusable UI widgets - composable pieces without sheet logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They take generic Message types and callbacks instead of `crate::app::Message`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (this module): Composable UI patterns
//! - **Components** (`crate::ui::components`): Screen pieces wired to app messages

pub mod artwork;
pub mod playback_controls;

pub use playback_controls::Control;
