// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation state and gesture handling.
//!
//! The [`CarouselEngine`] turns drag translations into a rotational offset,
//! snaps that offset to whole slots when a gesture ends or the card count
//! changes, and answers layout queries for the current offset.
//!
//! # States
//!
//! ```text
//!            drag_changed
//!   Idle ─────────────────► Dragging ──┐ drag_changed
//!    ▲                          │  ◄────┘
//!    │        drag_ended        │
//!    └──────────────────────────┘
//!
//!   item_count_changed: any state ──► Idle (re-snapped)
//! ```
//!
//! While dragging the transition duration is zero, so the renderer tracks
//! the finger 1:1. Every snap sets it to the configured settle duration.

use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::{CarouselConfig, SnapRounding};
use crate::layout::{Placement, layout_cylinder};
use crate::motion::Motion;
use crate::slot::{slot_spacing, snap_offset};

/// Gesture phase of the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// At rest: `offset == committed_offset`.
    #[default]
    Idle,
    /// A drag is in progress and the offset tracks the translation.
    Dragging,
}

/// The engine-owned rotation state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselState {
    /// Current rotational offset in degrees. Never wrapped.
    pub offset: f64,
    /// Offset at the last settle; new drag translations are added to it.
    pub committed_offset: f64,
    /// Duration, in seconds, the renderer should animate the latest change
    /// over. Zero while dragging.
    pub transition_duration: f64,
}

/// Rotation state machine for one carousel instance.
#[derive(Clone, Debug)]
pub struct CarouselEngine {
    state: CarouselState,
    phase: Phase,
    drag_sensitivity: f64,
    settle_duration: f64,
    radius: f64,
    rounding: SnapRounding,
}

impl CarouselEngine {
    /// Creates an engine at offset zero.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`CarouselConfig::validate`].
    #[must_use]
    pub fn new(config: &CarouselConfig) -> Self {
        config.validate();
        Self {
            state: CarouselState::default(),
            phase: Phase::Idle,
            drag_sensitivity: config.drag_sensitivity,
            settle_duration: config.settle_duration,
            radius: config.card_size.width,
            rounding: config.rounding,
        }
    }

    /// Returns a copy of the rotation state.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Current offset in degrees.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    /// Offset at the last settle.
    #[must_use]
    pub fn committed_offset(&self) -> f64 {
        self.state.committed_offset
    }

    /// Transition duration for the latest change.
    #[must_use]
    pub fn transition_duration(&self) -> f64 {
        self.state.transition_duration
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cylinder radius (the card width).
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Tracks a drag.
    ///
    /// `translation_x` is the cumulative horizontal translation since the
    /// gesture began, not a per-event delta. Calling this while idle opens a
    /// new gesture.
    pub fn drag_changed(&mut self, translation_x: f64) -> Motion {
        let from = self.state.offset;
        self.phase = Phase::Dragging;
        self.state.transition_duration = 0.0;
        self.state.offset = translation_x * self.drag_sensitivity + self.state.committed_offset;
        Motion {
            from,
            to: self.state.offset,
            duration: 0.0,
        }
    }

    /// Ends a drag and snaps to the nearest slot for `item_count` cards.
    ///
    /// The offset snapped is the one reached by the last
    /// [`drag_changed`](Self::drag_changed); `final_translation_x` does not
    /// move it again, so ending the same gesture twice is idempotent.
    ///
    /// With zero cards there is nothing to snap to: the current offset is
    /// committed as-is and the transition duration is left untouched.
    pub fn drag_ended(&mut self, final_translation_x: f64, item_count: usize) -> Motion {
        _ = final_translation_x;
        self.phase = Phase::Idle;
        if item_count == 0 {
            self.state.committed_offset = self.state.offset;
            return Motion::still(self.state.offset);
        }
        self.settle(item_count)
    }

    /// Re-snaps after the card count changed to `new_count`.
    ///
    /// Changing the count changes the slot spacing, so without a re-snap the
    /// centred card would drift off-centre. A count of zero is a no-op: the
    /// last offset is preserved for when cards come back.
    pub fn item_count_changed(&mut self, new_count: usize) -> Motion {
        if new_count == 0 {
            return Motion::still(self.state.offset);
        }
        self.phase = Phase::Idle;
        self.settle(new_count)
    }

    /// Lays out `items` for the current offset.
    ///
    /// Only the length of `items` matters; the output has one placement per
    /// item, in input order.
    #[must_use]
    pub fn layout<T>(&self, items: &[T]) -> Vec<Placement> {
        self.layout_count(items.len())
    }

    /// Lays out `count` cards for the current offset.
    #[must_use]
    pub fn layout_count(&self, count: usize) -> Vec<Placement> {
        layout_cylinder(self.state.offset, count, self.radius)
    }

    /// Index of the card nearest the front, or `None` for zero cards.
    ///
    /// At rest this is the single interactive card; mid-drag it is the card
    /// that would become interactive if the drag ended now.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slot numbers are bounded by the card count after rem_euclid"
    )]
    pub fn front_index(&self, count: usize) -> Option<usize> {
        let spacing = slot_spacing(count)?;
        let slot = (-self.state.offset / spacing).round() as i64;
        Some(slot.rem_euclid(count as i64) as usize)
    }

    fn settle(&mut self, count: usize) -> Motion {
        let from = self.state.offset;
        if let Some(snapped) = snap_offset(from, count, self.rounding) {
            self.state.offset = snapped;
        }
        self.state.committed_offset = self.state.offset;
        self.state.transition_duration = self.settle_duration;
        Motion {
            from,
            to: self.state.offset,
            duration: self.settle_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{FRONT_EPSILON, normalize_degrees};

    const EPS: f64 = 1e-9;

    fn engine() -> CarouselEngine {
        CarouselEngine::new(&CarouselConfig::standard())
    }

    #[test]
    fn starts_idle_at_zero() {
        let e = engine();
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.state(), CarouselState::default());
        assert_eq!(e.radius(), 150.0);
    }

    #[test]
    fn drag_tracks_cumulative_translation() {
        let mut e = engine();
        let m = e.drag_changed(100.0);
        assert_eq!(e.phase(), Phase::Dragging);
        assert!((e.offset() - 35.0).abs() < EPS);
        assert_eq!(e.committed_offset(), 0.0);
        assert_eq!(e.transition_duration(), 0.0);
        assert_eq!(m.duration, 0.0);

        // Cumulative, not incremental.
        e.drag_changed(40.0);
        assert!((e.offset() - 14.0).abs() < EPS);
    }

    #[test]
    fn drag_end_snaps_and_commits() {
        let mut e = engine();
        e.drag_changed(100.0);
        let m = e.drag_ended(100.0, 7);
        let spacing = 360.0 / 7.0;
        assert_eq!(e.phase(), Phase::Idle);
        assert!((e.offset() - spacing).abs() < EPS);
        assert_eq!(e.committed_offset(), e.offset());
        assert_eq!(e.transition_duration(), 0.2);
        assert!((m.from - 35.0).abs() < EPS);
        assert_eq!(m.to, e.offset());
        assert_eq!(m.duration, 0.2);
    }

    #[test]
    fn next_drag_starts_from_commit() {
        let mut e = engine();
        e.drag_changed(100.0);
        e.drag_ended(100.0, 6);
        assert_eq!(e.offset(), 60.0);
        e.drag_changed(-100.0);
        assert!((e.offset() - 25.0).abs() < EPS);
    }

    #[test]
    fn drag_end_without_cards_commits_in_place() {
        let mut e = engine();
        e.drag_changed(10.0);
        let m = e.drag_ended(10.0, 0);
        assert!((e.offset() - 3.5).abs() < EPS);
        assert_eq!(e.committed_offset(), e.offset());
        assert_eq!(e.transition_duration(), 0.0);
        assert!(m.is_still());
        assert_eq!(e.phase(), Phase::Idle);
    }

    #[test]
    fn count_change_to_zero_is_noop() {
        let mut e = engine();
        e.drag_changed(100.0);
        e.drag_ended(100.0, 7);
        let before = e.state();
        assert!(e.item_count_changed(0).is_still());
        assert_eq!(e.state(), before);
    }

    #[test]
    fn count_change_resnaps_with_transition() {
        let mut e = engine();
        e.drag_changed(100.0);
        e.drag_ended(100.0, 7);
        let m = e.item_count_changed(6);
        assert_eq!(e.offset(), 60.0);
        assert_eq!(e.committed_offset(), 60.0);
        assert_eq!(e.transition_duration(), 0.2);
        assert!((m.from - 360.0 / 7.0).abs() < EPS);
    }

    #[test]
    fn count_change_mid_drag_ends_gesture() {
        let mut e = engine();
        e.drag_changed(100.0);
        e.item_count_changed(4);
        assert_eq!(e.phase(), Phase::Idle);
        assert_eq!(e.offset(), 0.0);
        assert_eq!(e.committed_offset(), 0.0);
    }

    #[test]
    fn front_index_tracks_rotation() {
        let mut e = engine();
        assert_eq!(e.front_index(0), None);
        assert_eq!(e.front_index(7), Some(0));
        // One slot clockwise brings the last card to the front.
        e.drag_changed(100.0);
        e.drag_ended(100.0, 7);
        assert_eq!(e.front_index(7), Some(6));
        let front: Vec<_> = e
            .layout_count(7)
            .into_iter()
            .filter(|p| p.is_interactive)
            .map(|p| p.index)
            .collect();
        assert_eq!(front, [6]);
    }

    #[test]
    fn layout_uses_item_count_only() {
        let e = engine();
        let items = ["a", "b", "c"];
        let placements = e.layout(&items);
        assert_eq!(placements.len(), 3);
        assert!(placements.iter().all(|p| p.depth_translation == 150.0));
        assert!(e.layout::<u8>(&[]).is_empty());
    }

    #[test]
    fn rest_state_has_one_front_card_within_tolerance() {
        let mut e = engine();
        for (translation, count) in [(100.0, 7), (-333.0, 5), (1234.5, 9), (-7.0, 3)] {
            e.drag_changed(translation);
            e.drag_ended(translation, count);
            let interactive: Vec<_> = e
                .layout_count(count)
                .into_iter()
                .filter(|p| p.is_interactive)
                .collect();
            assert_eq!(interactive.len(), 1, "count {count}");
            let angle = normalize_degrees(interactive[0].rotation_degrees);
            let residual = angle.min(360.0 - angle);
            assert!(residual <= FRONT_EPSILON, "angle {angle}");
        }
    }
}
