//! Hover feedback for the inert transport and "more" buttons
//!
//! The sheet choreography has its own timing in `features::transition`;
//! small hover fades go through `iced_anim`.

mod hover;

pub use hover::HoverFade;
