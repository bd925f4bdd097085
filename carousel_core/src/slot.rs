// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot geometry: spacing, snapping, and the front-facing test.
//!
//! For `n` cards, slot `i` sits at `i * 360 / n` degrees plus the current
//! rotational offset. Slots are never stored; everything here is a pure
//! function of the offset and the card count.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::SnapRounding;

/// Degrees in one revolution of the carousel.
pub const FULL_TURN: f64 = 360.0;

/// Minimum tolerance, in degrees, for treating an angle as exactly
/// front-facing.
///
/// Slot angles are sums of floating-point multiples of `360 / n`, so a card
/// that should face the viewer can be off by a few ULPs. See
/// [`front_tolerance`] for how this grows with the angle.
pub const FRONT_EPSILON: f64 = 1e-6;

/// Angular distance between neighbouring slots, or `None` for zero cards.
#[inline]
#[must_use]
pub fn slot_spacing(count: usize) -> Option<f64> {
    (count > 0).then(|| FULL_TURN / count as f64)
}

/// Rounds `x` to an integer using the given tie-breaking rule.
#[must_use]
pub fn round_slot(x: f64, rounding: SnapRounding) -> f64 {
    match rounding {
        SnapRounding::HalfAwayFromZero => x.round(),
        SnapRounding::HalfToEven => {
            let r = x.round();
            if (x - x.trunc()).abs() == 0.5 {
                2.0 * (x / 2.0).round()
            } else {
                r
            }
        }
    }
}

/// Snaps `offset` to the nearest whole multiple of the slot spacing for
/// `count` cards.
///
/// Returns `None` when `count` is zero: there is no slot to snap to.
#[must_use]
pub fn snap_offset(offset: f64, count: usize, rounding: SnapRounding) -> Option<f64> {
    let spacing = slot_spacing(count)?;
    Some(round_slot(offset / spacing, rounding) * spacing)
}

/// Removes whole turns from `angle`, returning a value in `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle - (angle / FULL_TURN).floor() * FULL_TURN;
    // `floor` can leave exactly 360 for tiny negative inputs.
    if r >= FULL_TURN { 0.0 } else { r }
}

/// Tolerance used by [`is_front_facing`] for an angle of this magnitude.
///
/// [`FRONT_EPSILON`] for ordinary angles. Once a few ULPs of `angle` exceed
/// it, the tolerance scales with `|angle|` so a snapped offset far from zero
/// still has a front card.
#[inline]
#[must_use]
pub fn front_tolerance(angle: f64) -> f64 {
    FRONT_EPSILON.max(angle.abs() * 8.0 * f64::EPSILON)
}

/// Whether a card at `angle` faces the viewer head-on.
///
/// The angle is reduced by the nearest multiple of a full turn and compared
/// against zero within [`front_tolerance`].
#[must_use]
pub fn is_front_facing(angle: f64) -> bool {
    let residual = angle - (angle / FULL_TURN).round() * FULL_TURN;
    residual.abs() <= front_tolerance(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn spacing_divides_the_turn() {
        assert_eq!(slot_spacing(0), None);
        assert_eq!(slot_spacing(1), Some(360.0));
        assert_eq!(slot_spacing(6), Some(60.0));
        assert!((slot_spacing(7).unwrap() - 51.428_571_428_571_43).abs() < EPS);
    }

    #[test]
    fn snap_to_nearest_slot() {
        let snapped = snap_offset(35.0, 7, SnapRounding::HalfAwayFromZero).unwrap();
        assert!((snapped - 360.0 / 7.0).abs() < EPS, "got {snapped}");
        assert_eq!(snap_offset(29.0, 6, SnapRounding::HalfAwayFromZero), Some(0.0));
        assert_eq!(snap_offset(-31.0, 6, SnapRounding::HalfAwayFromZero), Some(-60.0));
        assert_eq!(snap_offset(12.0, 0, SnapRounding::HalfAwayFromZero), None);
    }

    #[test]
    fn ties_away_from_zero() {
        assert_eq!(snap_offset(30.0, 6, SnapRounding::HalfAwayFromZero), Some(60.0));
        assert_eq!(snap_offset(-30.0, 6, SnapRounding::HalfAwayFromZero), Some(-60.0));
        assert_eq!(snap_offset(90.0, 6, SnapRounding::HalfAwayFromZero), Some(120.0));
    }

    #[test]
    fn ties_to_even() {
        assert_eq!(snap_offset(30.0, 6, SnapRounding::HalfToEven), Some(0.0));
        assert_eq!(snap_offset(-30.0, 6, SnapRounding::HalfToEven), Some(0.0));
        assert_eq!(snap_offset(90.0, 6, SnapRounding::HalfToEven), Some(120.0));
        assert_eq!(snap_offset(150.0, 6, SnapRounding::HalfToEven), Some(120.0));
        // Non-ties are unaffected by the rule.
        assert_eq!(snap_offset(31.0, 6, SnapRounding::HalfToEven), Some(60.0));
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }

    #[test]
    fn front_facing_tolerates_accumulation() {
        let spacing = 360.0 / 7.0;
        assert!(is_front_facing(spacing + 6.0 * spacing));
        assert!(is_front_facing(-720.0));
        assert!(!is_front_facing(spacing));
        assert!(!is_front_facing(180.0));
        assert!(!is_front_facing(0.01));
    }

    #[test]
    fn tolerance_grows_with_magnitude() {
        assert_eq!(front_tolerance(0.0), FRONT_EPSILON);
        assert_eq!(front_tolerance(-720.0), FRONT_EPSILON);
        assert!(front_tolerance(3.5e10) > 1e-5);
        assert_eq!(front_tolerance(3.5e10), front_tolerance(-3.5e10));
    }

    #[test]
    fn front_facing_at_huge_snapped_offsets() {
        for count in [1_usize, 3, 7, 12] {
            for offset in [3.5e10, -3.5e10, 1.0e12] {
                let spacing = slot_spacing(count).unwrap();
                let snapped = snap_offset(offset, count, SnapRounding::HalfAwayFromZero).unwrap();
                let front = (0..count)
                    .filter(|&i| is_front_facing(snapped + i as f64 * spacing))
                    .count();
                assert_eq!(front, 1, "count {count}, offset {offset}");
            }
        }
    }
}
