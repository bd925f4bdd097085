// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning parameters for a carousel instance.

use kurbo::Size;

/// Tie-breaking rule used when snapping an offset to the nearest slot.
///
/// Only offsets that sit exactly half-way between two slots are affected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnapRounding {
    /// Ties round away from zero (`0.5 → 1`, `-0.5 → -1`).
    #[default]
    HalfAwayFromZero,
    /// Ties round to the even slot (`0.5 → 0`, `1.5 → 2`).
    HalfToEven,
}

/// Configuration for a [`Carousel`](crate::carousel::Carousel) and its
/// [`CarouselEngine`](crate::engine::CarouselEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Size of every card, in points.
    ///
    /// The card width doubles as the cylinder radius.
    pub card_size: Size,
    /// Corner radius of the card clip.
    pub corner_radius: f64,
    /// Degrees of rotation per point of horizontal drag translation.
    pub drag_sensitivity: f64,
    /// Duration, in seconds, of the settle animation after a snap.
    pub settle_duration: f64,
    /// Eye distance used for the perspective projection.
    pub perspective_distance: f64,
    /// Tie-breaking rule for slot snapping.
    pub rounding: SnapRounding,
}

impl CarouselConfig {
    /// The classic photo-card carousel: 150 × 220 cards, rotation slowed to
    /// 0.35° per point, 0.2 s settles.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            card_size: Size::new(150.0, 220.0),
            corner_radius: 20.0,
            drag_sensitivity: 0.35,
            settle_duration: 0.2,
            perspective_distance: 500.0,
            rounding: SnapRounding::HalfAwayFromZero,
        }
    }

    /// Returns a copy with a different card size.
    #[must_use]
    pub const fn with_card_size(mut self, card_size: Size) -> Self {
        self.card_size = card_size;
        self
    }

    /// Returns a copy with a different snap rounding rule.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: SnapRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Checks that every parameter is usable.
    ///
    /// # Panics
    ///
    /// Panics if the card size is not positive and finite, if the drag
    /// sensitivity is not finite, if the settle duration is negative or not
    /// finite, or if the perspective distance is not strictly greater than
    /// the card width (cards on the near rim would land behind the eye).
    pub fn validate(&self) {
        assert!(
            self.card_size.is_finite() && self.card_size.width > 0.0 && self.card_size.height > 0.0,
            "card size must be positive and finite, got {:?}",
            self.card_size
        );
        assert!(
            self.corner_radius.is_finite() && self.corner_radius >= 0.0,
            "corner radius must be non-negative, got {}",
            self.corner_radius
        );
        assert!(
            self.drag_sensitivity.is_finite(),
            "drag sensitivity must be finite, got {}",
            self.drag_sensitivity
        );
        assert!(
            self.settle_duration.is_finite() && self.settle_duration >= 0.0,
            "settle duration must be non-negative, got {}",
            self.settle_duration
        );
        assert!(
            self.perspective_distance.is_finite()
                && self.perspective_distance > self.card_size.width,
            "perspective distance {} must exceed the card width {}",
            self.perspective_distance,
            self.card_size.width
        );
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_valid() {
        CarouselConfig::standard().validate();
        assert_eq!(CarouselConfig::default(), CarouselConfig::standard());
    }

    #[test]
    fn builders_replace_single_fields() {
        let c = CarouselConfig::standard()
            .with_card_size(Size::new(100.0, 140.0))
            .with_rounding(SnapRounding::HalfToEven);
        assert_eq!(c.card_size, Size::new(100.0, 140.0));
        assert_eq!(c.rounding, SnapRounding::HalfToEven);
        assert_eq!(c.drag_sensitivity, 0.35);
    }

    #[test]
    #[should_panic(expected = "must exceed the card width")]
    fn eye_inside_cylinder_is_rejected() {
        let mut c = CarouselConfig::standard();
        c.perspective_distance = 100.0;
        c.validate();
    }

    #[test]
    #[should_panic(expected = "card size must be positive")]
    fn empty_card_is_rejected() {
        CarouselConfig::standard()
            .with_card_size(Size::ZERO)
            .validate();
    }
}
