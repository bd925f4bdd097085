// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal column-major 4×4 transform.
//!
//! Covers what a card on a cylinder needs: translation along the view axis,
//! rotation about the vertical axis, a one-parameter perspective, and
//! projection of points back to the 2-D plane.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, matching the memory layout
/// used by GPU APIs and Core Animation's `CATransform3D`. Points are column
/// vectors, so `a * b` applies `b` first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a rotation around the vertical (Y) axis.
    ///
    /// Positive angles swing the +Z axis towards +X.
    #[inline]
    #[must_use]
    pub fn from_rotation_y(radians: f64) -> Self {
        #[cfg(feature = "std")]
        let (s, c) = radians.sin_cos();
        #[cfg(not(feature = "std"))]
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a perspective transform with the eye at `distance` on +Z.
    ///
    /// This is the classic `m34 = -1 / distance` trick: after projection a
    /// point at depth `z` is scaled by `1 / (1 - z / distance)`.
    ///
    /// # Panics
    ///
    /// Panics if `distance` is not strictly positive.
    #[inline]
    #[must_use]
    pub fn from_perspective(distance: f64) -> Self {
        assert!(
            distance > 0.0,
            "perspective distance must be positive, got {distance}"
        );
        let mut t = Self::IDENTITY;
        t.cols[2][3] = -1.0 / distance;
        t
    }

    /// Applies the transform to `(x, y, z, 1)` and returns the homogeneous
    /// result `[x, y, z, w]`.
    #[inline]
    #[must_use]
    pub fn transform_point3(&self, x: f64, y: f64, z: f64) -> [f64; 4] {
        let c = &self.cols;
        let mut out = [0.0_f64; 4];
        for (i, o) in out.iter_mut().enumerate() {
            *o = c[0][i] * x + c[1][i] * y + c[2][i] * z + c[3][i];
        }
        out
    }

    /// Projects a point of the `z = 0` plane into the 2-D output plane.
    ///
    /// Returns `None` when the point lands on or behind the eye (`w <= 0`).
    #[inline]
    #[must_use]
    pub fn project(&self, p: Point) -> Option<Point> {
        let [x, y, _, w] = self.transform_point3(p.x, p.y, 0.0);
        (w > 0.0).then(|| Point::new(x / w, y / w))
    }

    /// Returns the matrix as sixteen `f32` values in column-major order.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "GPU uploads use single precision"
    )]
    pub fn to_cols_f32(&self) -> [f32; 16] {
        let mut out = [0.0_f32; 16];
        for (j, col) in self.cols.iter().enumerate() {
            for (i, v) in col.iter().enumerate() {
                out[j * 4 + i] = *v as f32;
            }
        }
        out
    }

    /// Is every element of this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: [f64; 4], b: [f64; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform3d::default(), Transform3d::IDENTITY);
    }

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Transform3d::IDENTITY * t, t);
        assert_eq!(t * Transform3d::IDENTITY, t);
    }

    #[test]
    fn translation_composition() {
        let a = Transform3d::from_translation(1.0, 0.0, 0.0);
        let b = Transform3d::from_translation(0.0, 2.0, 0.0);
        assert_eq!((a * b).col(3), [1.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn rotation_y_quarter_turn_moves_forward_to_right() {
        let r = Transform3d::from_rotation_y(core::f64::consts::FRAC_PI_2);
        let p = r.transform_point3(0.0, 0.0, 1.0);
        assert!(close(p, [1.0, 0.0, 0.0, 1.0]), "got {p:?}");
    }

    #[test]
    fn rotate_then_translate_puts_card_on_rim() {
        // Translation is applied first, then rotation: the card is pushed out
        // along the rotated forward axis.
        let m = Transform3d::from_rotation_y(core::f64::consts::PI)
            * Transform3d::from_translation(0.0, 0.0, 150.0);
        let p = m.transform_point3(0.0, 0.0, 0.0);
        assert!(close(p, [0.0, 0.0, -150.0, 1.0]), "got {p:?}");
    }

    #[test]
    fn perspective_enlarges_near_points() {
        let m = Transform3d::from_perspective(500.0) * Transform3d::from_translation(0.0, 0.0, 150.0);
        let projected = m.project(Point::new(10.0, 0.0)).unwrap();
        assert!((projected.x - 10.0 / 0.7).abs() < EPS, "got {projected:?}");
    }

    #[test]
    fn projection_behind_eye_is_none() {
        let m = Transform3d::from_perspective(100.0) * Transform3d::from_translation(0.0, 0.0, 200.0);
        assert!(m.project(Point::ORIGIN).is_none());
    }

    #[test]
    #[should_panic(expected = "perspective distance must be positive")]
    fn zero_perspective_panics() {
        let _ = Transform3d::from_perspective(0.0);
    }

    #[test]
    fn f32_columns_follow_layout() {
        let cols = Transform3d::from_translation(5.0, 6.0, 7.0).to_cols_f32();
        assert_eq!(&cols[12..], &[5.0, 6.0, 7.0, 1.0]);
    }

    #[test]
    fn non_finite_detected() {
        let mut t = Transform3d::IDENTITY;
        assert!(t.is_finite());
        t.cols[2][1] = f64::NAN;
        assert!(!t.is_finite());
    }
}
