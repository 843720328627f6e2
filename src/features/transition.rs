//! Expand / collapse state machine for the now-playing sheet
//!
//! The sheet is driven by one [`TransitionController`]. Every change goes
//! through [`TransitionController::handle`], which takes a [`SheetEvent`] and
//! the current time. The phase is a tagged enum, so "content revealed while
//! collapsed" cannot be represented: only the expanded phases carry a reveal
//! flag.
//!
//! ```text
//! Collapsed --Expand--> Expanding --0.3s--> Expanded
//!                           (Mounted starts the 0.35s content reveal)
//! Expanded --DragChanged--> Dragging(max(0, dy))
//! Dragging --DragEnded, o > 0.4h--> Collapsing --0.3s--> Collapsed
//! Dragging --DragEnded, o <= 0.4h--> Settling --0.3s--> Expanded
//! any expanded phase --Dismiss--> Collapsing
//! ```

mod easing;
mod tween;

use std::time::{Duration, Instant};

pub use tween::Tween;

/// Durations and thresholds for the sheet choreography
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Hero morph from bar to sheet
    pub expand_duration: Duration,
    /// Staggered reveal of handle, artwork corners and player panel
    pub reveal_duration: Duration,
    /// Hero morph back into the bar
    pub collapse_duration: Duration,
    /// Drag offset snapping back after a cancelled dismiss
    pub settle_duration: Duration,
    /// Fraction of the screen height a drag must exceed to dismiss
    pub commit_fraction: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            expand_duration: Duration::from_millis(300),
            reveal_duration: Duration::from_millis(350),
            collapse_duration: Duration::from_millis(300),
            settle_duration: Duration::from_millis(300),
            commit_fraction: 0.4,
        }
    }
}

impl TransitionConfig {
    /// Same thresholds, every animation completes on the next tick
    pub fn reduced_motion() -> Self {
        Self {
            expand_duration: Duration::ZERO,
            reveal_duration: Duration::ZERO,
            collapse_duration: Duration::ZERO,
            settle_duration: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Drag distance above which a release commits the dismiss
    pub fn commit_threshold(&self, screen_height: f32) -> f32 {
        screen_height * self.commit_fraction
    }
}

/// Where the sheet currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetPhase {
    /// Only the bar is shown
    #[default]
    Collapsed,
    /// Hero is morphing toward the sheet
    Expanding { revealed: bool },
    /// Sheet is at rest
    Expanded { revealed: bool },
    /// User is dragging the sheet down; offset is already clamped to >= 0
    Dragging { offset: f32 },
    /// Drag was cancelled, offset is animating back to 0
    Settling,
    /// Sheet is morphing back into the bar
    Collapsing,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// Tap on the collapsed bar (or any other expand trigger)
    Expand,
    /// Sheet content appeared on screen
    Mounted,
    /// Drag translation relative to where the drag started
    DragChanged { translation_y: f32 },
    /// Drag released; `screen_height` sizes the commit threshold
    DragEnded { screen_height: f32 },
    /// Close without a gesture (keyboard, programmatic)
    Dismiss,
    /// Frame tick, lets finished animations settle into their next phase
    Tick,
}

/// What a handled event did, for callers that react to transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not applicable in the current phase; nothing changed
    Ignored,
    /// State advanced without reaching a notable transition
    Updated,
    /// Expansion began; the sheet should mount and send [`SheetEvent::Mounted`]
    ExpandStarted,
    /// Drag released past the threshold
    DismissCommitted,
    /// Drag released short of the threshold
    DismissCancelled,
    /// Closed by a non-gesture trigger
    Dismissed,
    /// Animations finished with the sheet at rest, expanded
    SettledExpanded,
    /// Animations finished with only the bar visible
    SettledCollapsed,
}

/// Owner of the sheet phase and its animations
#[derive(Debug, Clone)]
pub struct TransitionController {
    phase: SheetPhase,
    /// 0 = bar geometry, 1 = sheet geometry
    hero: Tween,
    /// 0 = content hidden, 1 = fully revealed
    reveal: Tween,
    /// Vertical sheet offset while settling or collapsing after a drag
    offset: Tween,
    /// Time of the latest handled event
    now: Instant,
    config: TransitionConfig,
}

impl TransitionController {
    pub fn new(config: TransitionConfig, now: Instant) -> Self {
        Self {
            phase: SheetPhase::Collapsed,
            hero: Tween::at_rest(0.0, now),
            reveal: Tween::at_rest(0.0, now),
            offset: Tween::at_rest(0.0, now),
            now,
            config,
        }
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Swap durations and thresholds; running animations keep their timing
    pub fn set_config(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    /// The single mutation entry point
    pub fn handle(&mut self, event: SheetEvent, now: Instant) -> Outcome {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;

        let outcome = match event {
            SheetEvent::Expand => self.expand(now),
            SheetEvent::Mounted => self.mount(now),
            SheetEvent::DragChanged { translation_y } => self.drag(translation_y),
            SheetEvent::DragEnded { screen_height } => self.release(screen_height, now),
            SheetEvent::Dismiss => self.dismiss(now),
            SheetEvent::Tick => Outcome::Ignored,
        };

        // Zero-length animations finish inside the same event
        let settled = self.advance(now);
        match (event, outcome) {
            (SheetEvent::Tick, _) => settled,
            (_, Outcome::Ignored) => Outcome::Ignored,
            (_, outcome) => outcome,
        }
    }

    fn expand(&mut self, now: Instant) -> Outcome {
        let duration = self.config.expand_duration;
        match self.phase {
            SheetPhase::Collapsed => {
                self.hero = Tween::new(0.0, 1.0, now, duration);
                self.reveal = Tween::at_rest(0.0, now);
                self.offset = Tween::at_rest(0.0, now);
                self.phase = SheetPhase::Expanding { revealed: false };
                Outcome::ExpandStarted
            }
            SheetPhase::Collapsing => {
                // A new request supersedes the running collapse
                self.hero = self.hero.retarget(1.0, now, duration);
                self.phase = SheetPhase::Expanding { revealed: false };
                Outcome::ExpandStarted
            }
            SheetPhase::Expanding { .. }
            | SheetPhase::Expanded { .. }
            | SheetPhase::Dragging { .. }
            | SheetPhase::Settling => Outcome::Ignored,
        }
    }

    fn mount(&mut self, now: Instant) -> Outcome {
        let reveal = self.reveal.retarget(1.0, now, self.config.reveal_duration);
        match self.phase {
            SheetPhase::Expanding { revealed: false } => {
                self.reveal = reveal;
                self.phase = SheetPhase::Expanding { revealed: true };
                Outcome::Updated
            }
            SheetPhase::Expanded { revealed: false } => {
                self.reveal = reveal;
                self.phase = SheetPhase::Expanded { revealed: true };
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn drag(&mut self, translation_y: f32) -> Outcome {
        match self.phase {
            SheetPhase::Expanded { revealed: true }
            | SheetPhase::Settling
            | SheetPhase::Dragging { .. } => {
                // Upward movement has no effect; NaN collapses to 0 as well
                self.phase = SheetPhase::Dragging {
                    offset: translation_y.max(0.0),
                };
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn release(&mut self, screen_height: f32, now: Instant) -> Outcome {
        let SheetPhase::Dragging { offset } = self.phase else {
            return Outcome::Ignored;
        };

        if offset > self.config.commit_threshold(screen_height) {
            self.begin_collapse(offset, now);
            Outcome::DismissCommitted
        } else {
            self.offset = Tween::new(offset, 0.0, now, self.config.settle_duration);
            self.phase = SheetPhase::Settling;
            Outcome::DismissCancelled
        }
    }

    fn dismiss(&mut self, now: Instant) -> Outcome {
        match self.phase {
            SheetPhase::Expanding { .. }
            | SheetPhase::Expanded { .. }
            | SheetPhase::Dragging { .. }
            | SheetPhase::Settling => {
                let offset = self.drag_offset();
                self.begin_collapse(offset, now);
                Outcome::Dismissed
            }
            SheetPhase::Collapsed | SheetPhase::Collapsing => Outcome::Ignored,
        }
    }

    /// Reverse the entry sequence, starting from wherever it currently is
    fn begin_collapse(&mut self, offset: f32, now: Instant) {
        let duration = self.config.collapse_duration;
        self.hero = self.hero.retarget(0.0, now, duration);
        self.reveal = self.reveal.retarget(0.0, now, duration);
        self.offset = Tween::new(offset, 0.0, now, duration);
        self.phase = SheetPhase::Collapsing;
    }

    /// Move phases whose animation has finished to their resting phase
    fn advance(&mut self, now: Instant) -> Outcome {
        match self.phase {
            SheetPhase::Expanding { revealed } if self.hero.is_finished(now) => {
                self.phase = SheetPhase::Expanded { revealed };
                Outcome::SettledExpanded
            }
            SheetPhase::Settling if self.offset.is_finished(now) => {
                self.offset = Tween::at_rest(0.0, now);
                self.phase = SheetPhase::Expanded { revealed: true };
                Outcome::SettledExpanded
            }
            SheetPhase::Collapsing
                if self.hero.is_finished(now)
                    && self.reveal.is_finished(now)
                    && self.offset.is_finished(now) =>
            {
                self.hero = Tween::at_rest(0.0, now);
                self.reveal = Tween::at_rest(0.0, now);
                self.offset = Tween::at_rest(0.0, now);
                self.phase = SheetPhase::Collapsed;
                Outcome::SettledCollapsed
            }
            _ if self.is_animating() => Outcome::Updated,
            _ => Outcome::Ignored,
        }
    }

    // ---------------------------------------------------------------------
    // Derived values for rendering
    // ---------------------------------------------------------------------

    /// The logical "expanded" flag
    pub fn is_expanded(&self) -> bool {
        matches!(
            self.phase,
            SheetPhase::Expanding { .. }
                | SheetPhase::Expanded { .. }
                | SheetPhase::Dragging { .. }
                | SheetPhase::Settling
        )
    }

    /// The logical "content revealed" flag; never true while collapsed
    pub fn is_content_revealed(&self) -> bool {
        match self.phase {
            SheetPhase::Expanding { revealed } | SheetPhase::Expanded { revealed } => revealed,
            SheetPhase::Dragging { .. } | SheetPhase::Settling => true,
            SheetPhase::Collapsed | SheetPhase::Collapsing => false,
        }
    }

    /// Whether the sheet layer has to be drawn at all
    pub fn is_sheet_visible(&self) -> bool {
        self.phase != SheetPhase::Collapsed
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SheetPhase::Dragging { .. })
    }

    /// Current vertical sheet offset, always >= 0
    pub fn drag_offset(&self) -> f32 {
        match self.phase {
            SheetPhase::Dragging { offset } => offset,
            SheetPhase::Settling | SheetPhase::Collapsing => self.offset.value(self.now).max(0.0),
            _ => 0.0,
        }
    }

    /// Shared-geometry progress, 0 = bar, 1 = sheet
    pub fn hero_progress(&self) -> f32 {
        self.hero.value(self.now).clamp(0.0, 1.0)
    }

    /// Secondary content reveal progress
    pub fn reveal_progress(&self) -> f32 {
        self.reveal.value(self.now).clamp(0.0, 1.0)
    }

    /// True while any interpolation still has frames to produce
    pub fn is_animating(&self) -> bool {
        let now = self.now;
        matches!(
            self.phase,
            SheetPhase::Expanding { .. } | SheetPhase::Settling | SheetPhase::Collapsing
        ) || !self.hero.is_finished(now)
            || !self.reveal.is_finished(now)
            || !self.offset.is_finished(now)
    }
}
