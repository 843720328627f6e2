//! UI module for the mini player
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without app messages
//! - **Components** (`components`): Bar, sheet and tab strip with Message handling

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
