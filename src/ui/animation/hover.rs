//! Exclusive hover fade using iced_anim
//!
//! At most one control is highlighted. When the pointer moves on, the old
//! control keeps fading out while the new one fades in.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(150);

fn easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

fn fade(from: f32, to: f32) -> Animated<f32> {
    let mut animation = Animated::transition(from, easing());
    animation.update(to.into());
    animation
}

/// Hover highlight for a set of keyed controls
#[derive(Debug)]
pub struct HoverFade<K: PartialEq + Copy> {
    entering: Option<(K, Animated<f32>)>,
    leaving: Option<(K, Animated<f32>)>,
}

impl<K: PartialEq + Copy> Default for HoverFade<K> {
    fn default() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }
}

impl<K: PartialEq + Copy> HoverFade<K> {
    /// Highlight `key`, or nothing when `None`
    pub fn set(&mut self, key: Option<K>) {
        if self.entering.as_ref().map(|(k, _)| *k) == key {
            return;
        }

        if let Some((old, animation)) = self.entering.take() {
            self.leaving = Some((old, fade(*animation.value(), 0.0)));
        }

        self.entering = key.map(|k| {
            // Re-entering a control that is still fading out resumes from there
            let start = match &self.leaving {
                Some((leaving, animation)) if *leaving == k => *animation.value(),
                _ => 0.0,
            };
            (k, fade(start, 1.0))
        });
    }

    /// Highlight strength for `key`, 0.0 to 1.0
    pub fn progress(&self, key: K) -> f32 {
        match (&self.entering, &self.leaving) {
            (Some((k, animation)), _) if *k == key => *animation.value(),
            (_, Some((k, animation))) if *k == key => *animation.value(),
            _ => 0.0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.entering
            .iter()
            .chain(self.leaving.iter())
            .any(|(_, animation)| animation.is_animating())
    }

    /// Advance both fades; drops the fade-out once it has finished
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, animation)) = &mut self.entering {
            animation.tick(now);
        }
        if let Some((_, animation)) = &mut self.leaving {
            animation.tick(now);
            if !animation.is_animating() {
                self.leaving = None;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_highlighted_initially() {
        let hover: HoverFade<u8> = HoverFade::default();
        assert_eq!(hover.progress(1), 0.0);
        assert!(!hover.is_animating());
    }

    #[test]
    fn entering_reaches_full_highlight() {
        let mut hover: HoverFade<u8> = HoverFade::default();
        hover.set(Some(1));
        assert!(hover.is_animating());

        hover.tick(Instant::now() + Duration::from_secs(1));
        assert!(hover.progress(1) > 0.99);
        assert_eq!(hover.progress(2), 0.0);
    }

    #[test]
    fn switching_fades_the_old_control_out() {
        let mut hover: HoverFade<u8> = HoverFade::default();
        hover.set(Some(1));
        hover.tick(Instant::now() + Duration::from_secs(1));

        hover.set(Some(2));
        assert!(hover.progress(1) > 0.0, "old control should still be fading");

        hover.tick(Instant::now() + Duration::from_secs(2));
        assert_eq!(hover.progress(1), 0.0);
        assert!(hover.progress(2) > 0.99);
        assert!(!hover.is_animating());
    }

    #[test]
    fn clear_drops_everything() {
        let mut hover: HoverFade<u8> = HoverFade::default();
        hover.set(Some(3));
        hover.clear();
        assert_eq!(hover.progress(3), 0.0);
        assert!(!hover.is_animating());
    }
}
