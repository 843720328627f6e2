//! Feature modules - interaction logic separated from UI
//!
//! Each feature module contains the core logic for one concern.
//! Features should not depend on UI components directly.

pub mod artwork;
pub mod hero;
pub mod layout;
pub mod settings;
pub mod track;
pub mod transition;

pub use hero::{HeroFrame, HeroProgress, HeroSlot, SharedAnimationNamespace, SharedElementId};
pub use layout::{IconScale, SheetLayout};
pub use settings::Settings;
pub use track::NowPlaying;
pub use transition::{Outcome, SheetEvent, TransitionConfig, TransitionController};
