// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset changes requested by the engine, and how renderers interpolate them.

/// A change of the carousel offset produced by one engine call.
///
/// `duration` is zero while a drag tracks the finger and positive for a
/// settle animation. The engine never re-invokes itself while the
/// animation runs; renderers [`sample`](Self::sample) the motion per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Offset before the call, in degrees.
    pub from: f64,
    /// Offset after the call, in degrees.
    pub to: f64,
    /// Animation duration in seconds.
    pub duration: f64,
}

impl Motion {
    /// A motion that leaves the offset where it is.
    #[must_use]
    pub const fn still(offset: f64) -> Self {
        Self {
            from: offset,
            to: offset,
            duration: 0.0,
        }
    }

    /// Whether the offset actually moves.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.from == self.to
    }

    /// Interpolated offset `elapsed` seconds into the motion.
    ///
    /// Uses the ease-in-out timing curve. Zero-duration motions and
    /// elapsed times past the end return [`to`](Self::to).
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        if elapsed <= 0.0 {
            return self.from;
        }
        let progress = ease_in_out(elapsed / self.duration);
        self.from + (self.to - self.from) * progress
    }
}

/// Control points of the standard ease-in-out curve.
const EASE_X1: f64 = 0.42;
const EASE_X2: f64 = 0.58;

/// Cubic Bézier `(0.42, 0) (0.58, 1)` evaluated at time fraction `x`.
///
/// Solves `bx(t) = x` by bisection; the curve is monotonic in `t`.
fn ease_in_out(x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut t = x;
    for _ in 0..48 {
        let bx = bezier(t, EASE_X1, EASE_X2);
        if (bx - x).abs() < 1e-12 {
            break;
        }
        if bx < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    bezier(t, 0.0, 1.0)
}

/// One coordinate of a cubic Bézier from 0 to 1 with inner controls `p1`, `p2`.
fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_jumps() {
        let m = Motion {
            from: 0.0,
            to: 35.0,
            duration: 0.0,
        };
        assert_eq!(m.sample(0.0), 35.0);
    }

    #[test]
    fn endpoints_are_exact() {
        let m = Motion {
            from: 35.0,
            to: 60.0,
            duration: 0.2,
        };
        assert_eq!(m.sample(-1.0), 35.0);
        assert_eq!(m.sample(0.0), 35.0);
        assert_eq!(m.sample(0.2), 60.0);
        assert_eq!(m.sample(5.0), 60.0);
    }

    #[test]
    fn curve_is_symmetric_and_monotonic() {
        let m = Motion {
            from: 0.0,
            to: 100.0,
            duration: 1.0,
        };
        assert!((m.sample(0.5) - 50.0).abs() < 1e-6, "mid = {}", m.sample(0.5));
        // Slow start: less than linear progress early on.
        assert!(m.sample(0.1) < 10.0);
        let mut prev = 0.0;
        for step in 1..=20 {
            let v = m.sample(f64::from(step) / 20.0);
            assert!(v >= prev, "non-monotonic at step {step}");
            prev = v;
        }
    }

    #[test]
    fn still_motion() {
        assert!(Motion::still(12.0).is_still());
        assert_eq!(Motion::still(12.0).sample(0.1), 12.0);
    }
}
