// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame evaluation and change tracking.
//!
//! Evaluation drains each dirty channel in turn:
//!
//! 1. **TRANSFORM**: recompute each dirty card's `world_transform` as
//!    `stage * local_transform`. A stage change reaches every card through
//!    eager propagation.
//! 2. **INTERACTION** and **CONTENT**: collect only. Presenters read the
//!    current values from the store.
//! 3. **TOPOLOGY**: drain and discard. Order changes are reported through
//!    [`FrameChanges::order_changed`].
//!
//! [`FrameChanges`] carries raw slot indices (`u32`) so presenters can index
//! the store through the `*_at()` accessors without generation checks. The
//! stage slot never appears in it.

use alloc::vec::Vec;

use super::store::{CardStore, STAGE};
use crate::dirty;

/// The set of changes produced by a single [`CardStore::evaluate`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameChanges {
    /// Cards whose world transform was recomputed.
    pub transforms: Vec<u32>,
    /// Cards whose interactive flag changed.
    pub interactivity: Vec<u32>,
    /// Cards whose surface content changed.
    pub content: Vec<u32>,
    /// Cards created since the last evaluate. Each slot appears at most once.
    pub added: Vec<u32>,
    /// Cards destroyed since the last evaluate. Each slot appears at most once.
    ///
    /// A slot can appear in both lists when a presented card was destroyed
    /// and its slot reused by a new card. Presenters apply `removed` before
    /// `added`.
    pub removed: Vec<u32>,
    /// Whether the carousel order changed.
    pub order_changed: bool,
    /// Seconds presenters should animate these changes over.
    pub transition_duration: f64,
}

impl FrameChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.interactivity.clear();
        self.content.clear();
        self.added.clear();
        self.removed.clear();
        self.order_changed = false;
        self.transition_duration = 0.0;
    }

    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
            && self.interactivity.is_empty()
            && self.content.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && !self.order_changed
    }
}

impl CardStore {
    /// Evaluates the store, recomputing dirty world transforms and returning
    /// the set of changes.
    pub fn evaluate(&mut self) -> FrameChanges {
        let mut changes = FrameChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut FrameChanges) {
        changes.clear();

        let stage = self.local_transform[STAGE as usize];
        self.world_transform[STAGE as usize] = stage;

        let mut dirty_transforms: Vec<u32> = self
            .dirty
            .drain(dirty::TRANSFORM)
            .affected()
            .deterministic()
            .run()
            .collect();
        dirty_transforms.retain(|&idx| self.is_card_slot(idx));
        for &idx in &dirty_transforms {
            self.world_transform[idx as usize] = stage * self.local_transform[idx as usize];
        }
        changes.transforms = dirty_transforms;

        changes.interactivity = self
            .dirty
            .drain(dirty::INTERACTION)
            .deterministic()
            .run()
            .collect();
        changes.interactivity.retain(|&idx| self.is_card_slot(idx));

        changes.content = self
            .dirty
            .drain(dirty::CONTENT)
            .deterministic()
            .run()
            .collect();
        changes.content.retain(|&idx| self.is_card_slot(idx));

        let _: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();

        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);

        changes.order_changed = core::mem::take(&mut self.order_dirty);
        changes.transition_duration = self.transition_duration;
    }

    fn is_card_slot(&self, idx: u32) -> bool {
        idx != STAGE && self.alive[idx as usize]
    }
}
