//! UI Components module - screen pieces wired to app messages
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no app messages)
//! - **Components** (this module): Bar, sheet and tab strip

pub mod expanded_sheet;
pub mod mini_player;
pub mod tab_bar;

pub use expanded_sheet::SheetFrame;
pub use tab_bar::Tab;
