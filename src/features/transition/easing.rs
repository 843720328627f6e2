//! Timing curves for sheet transitions
//!
//! Curves are CSS-style cubic Béziers anchored at (0, 0) and (1, 1).
//! `EASE_IN_OUT` matches the standard ease-in-out timing used by the
//! platform the interaction is modelled on.

/// A cubic Bézier timing curve with control points (x1, y1) and (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Standard ease-in-out curve
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Linear timing (identity)
#[allow(dead_code)]
pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-6;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map linear time `t` in [0, 1] to eased progress
    ///
    /// Inputs outside [0, 1] are clamped, so the endpoints are exact.
    pub fn apply(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_parameter(t);
        sample(self.y1, self.y2, s)
    }

    /// Find the curve parameter whose x coordinate equals `x`
    fn solve_parameter(&self, x: f32) -> f32 {
        // Newton-Raphson first, it converges in a few steps for sane curves
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(self.x1, self.x2, s) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let slope = slope(self.x1, self.x2, s);
            if slope.abs() < EPSILON {
                break;
            }
            s -= error / slope;
        }

        // Fall back to bisection for flat regions
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, s);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

/// One coordinate of the Bézier at parameter `s` (endpoints fixed at 0 and 1)
fn sample(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(EASE_IN_OUT.apply(0.0), 0.0);
        assert_eq!(EASE_IN_OUT.apply(1.0), 1.0);
        assert_eq!(EASE_IN_OUT.apply(-3.0), 0.0);
        assert_eq!(EASE_IN_OUT.apply(7.5), 1.0);
        assert_eq!(EASE_IN_OUT.apply(f32::NAN), 0.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        assert!((EASE_IN_OUT.apply(0.5) - 0.5).abs() < 1e-3);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let a = EASE_IN_OUT.apply(t);
            let b = 1.0 - EASE_IN_OUT.apply(1.0 - t);
            assert!((a - b).abs() < 1e-3, "asymmetric at t={}: {} vs {}", t, a, b);
        }
    }

    #[test]
    fn ease_in_out_starts_slow() {
        // Slower than linear in the first half, faster in the second
        assert!(EASE_IN_OUT.apply(0.2) < 0.2);
        assert!(EASE_IN_OUT.apply(0.8) > 0.8);
    }

    #[test]
    fn curve_is_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let value = EASE_IN_OUT.apply(i as f32 / 100.0);
            assert!(value >= previous - 1e-5, "curve went backwards at step {}", i);
            previous = value;
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((LINEAR.apply(t) - t).abs() < 1e-4);
        }
    }
}
