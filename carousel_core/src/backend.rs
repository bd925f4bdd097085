// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter contract for platform integrations.
//!
//! A presenter mirrors the card store into some native tree: one view per
//! card, each with a 3D transform, a content surface, and a flag that
//! enables or disables pointer input. The carousel never talks to the native
//! tree directly.

use crate::card::{CardStore, FrameChanges};

/// Applies evaluated frame changes to a presentation tree.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_gesture(translation_x: f64) {
///     carousel.drag_changed(translation_x, &mut tracer);
///     let changes = carousel.update(&mut tracer);
///     presenter.apply(carousel.store(), &changes);
/// }
/// ```
///
/// Presenters animate the new values over
/// [`FrameChanges::transition_duration`] seconds. A zero duration means the
/// values apply immediately, which is what keeps a drag tracking the finger.
///
/// A slot index can appear in both [`FrameChanges::removed`] and
/// [`FrameChanges::added`] when a presented card was destroyed and its slot
/// reused. Apply removals first.
pub trait Presenter {
    /// Applies the given [`FrameChanges`], reading current property values
    /// from `store` as needed.
    fn apply(&mut self, store: &CardStore, changes: &FrameChanges);
}
