// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card placement on the carousel cylinder.
//!
//! A [`Placement`] is the renderer-facing description of one card: how far
//! it is rotated about the vertical axis, how far it is pushed out along the
//! rotated forward axis, and whether it may receive pointer input.

use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::slot::{is_front_facing, slot_spacing};
use crate::transform::Transform3d;

/// Where a single card sits on the cylinder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Position of the card in the item sequence.
    pub index: usize,
    /// Rotation about the vertical axis, in degrees. Not normalized.
    pub rotation_degrees: f64,
    /// Distance the card is pushed out along its rotated forward axis.
    pub depth_translation: f64,
    /// Whether the card faces the viewer head-on and accepts input.
    pub is_interactive: bool,
}

impl Placement {
    /// Local transform of the card: rotate about Y, then push out along
    /// the rotated forward axis.
    ///
    /// Perspective is a carousel-wide concern and lives on the stage (see
    /// [`CardStore::set_stage_transform`](crate::card::CardStore::set_stage_transform)).
    #[must_use]
    pub fn transform(&self) -> Transform3d {
        Transform3d::from_rotation_y(self.rotation_degrees.to_radians())
            * Transform3d::from_translation(0.0, 0.0, self.depth_translation)
    }

    /// Depth of the card centre along the view axis; larger is nearer.
    #[must_use]
    pub fn view_depth(&self) -> f64 {
        self.depth_translation * self.rotation_degrees.to_radians().cos()
    }
}

/// Lays out `count` cards around a cylinder of radius `radius`, rotated by
/// `offset` degrees.
///
/// Card `i` lands at `offset + i * 360 / count`. Returns an empty vector
/// when `count` is zero.
#[must_use]
pub fn layout_cylinder(offset: f64, count: usize, radius: f64) -> Vec<Placement> {
    let Some(spacing) = slot_spacing(count) else {
        return Vec::new();
    };
    (0..count)
        .map(|index| {
            let angle = offset + index as f64 * spacing;
            Placement {
                index,
                rotation_degrees: angle,
                depth_translation: radius,
                is_interactive: is_front_facing(angle),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::slot::normalize_degrees;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_layout() {
        assert!(layout_cylinder(42.0, 0, 150.0).is_empty());
    }

    #[test]
    fn single_card_faces_front_at_rest() {
        let placements = layout_cylinder(360.0, 1, 150.0);
        assert_eq!(placements.len(), 1);
        assert!(placements[0].is_interactive);
    }

    #[test]
    fn cards_are_evenly_spaced() {
        let placements = layout_cylinder(17.0, 5, 150.0);
        let mut angles: Vec<f64> = placements
            .iter()
            .map(|p| normalize_degrees(p.rotation_degrees))
            .collect();
        angles.sort_by(f64::total_cmp);
        for pair in angles.windows(2) {
            assert!((pair[1] - pair[0] - 72.0).abs() < EPS, "angles {angles:?}");
        }
        assert!(placements.iter().all(|p| !p.is_interactive));
    }

    #[test]
    fn indices_follow_input_order() {
        let indices: Vec<usize> = layout_cylinder(0.0, 4, 10.0).iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn front_card_is_nearest() {
        let placements = layout_cylinder(0.0, 4, 150.0);
        assert!((placements[0].view_depth() - 150.0).abs() < EPS);
        assert!((placements[2].view_depth() + 150.0).abs() < EPS);
        assert!(placements[1].view_depth().abs() < EPS);
    }

    #[test]
    fn transform_places_center_on_rim() {
        let p = Placement {
            index: 0,
            rotation_degrees: 90.0,
            depth_translation: 150.0,
            is_interactive: false,
        };
        let [x, y, z, w] = p.transform().transform_point3(0.0, 0.0, 0.0);
        assert!((x - 150.0).abs() < EPS, "x = {x}");
        assert!(y.abs() < EPS && z.abs() < EPS, "y = {y}, z = {z}");
        assert_eq!(w, 1.0);
    }
}
