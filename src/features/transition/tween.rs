//! Time-based interpolation between two scalar values

use std::time::{Duration, Instant};

use super::easing::{CubicBezier, EASE_IN_OUT};

/// A single eased animation from `from` to `to`
///
/// Values are sampled with an explicit `Instant`, so the same tween can be
/// replayed deterministically in tests. Retargeting starts a new tween from
/// whatever value the old one had reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    curve: CubicBezier,
}

impl Tween {
    /// Start an ease-in-out animation at `now`
    pub fn new(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
            curve: EASE_IN_OUT,
        }
    }

    /// A tween that is already at rest on `value`
    pub fn at_rest(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO)
    }

    /// Linear time fraction in [0, 1]
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased value at `now`
    pub fn value(&self, now: Instant) -> f32 {
        let eased = self.curve.apply(self.fraction(now));
        if eased >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * eased
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }

    /// Begin animating toward `to` from the value reached at `now`
    pub fn retarget(&self, to: f32, now: Instant, duration: Duration) -> Self {
        Self::new(self.value(now), to, now, duration)
    }
}
