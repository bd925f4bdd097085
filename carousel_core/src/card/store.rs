// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays card storage with allocation, ordering, and property
//! management.

use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{CardId, SurfaceId};
use crate::dirty;
use crate::transform::Transform3d;

/// Slot of the stage node. Never handed out as a [`CardId`].
pub(crate) const STAGE: u32 = 0;

/// Struct-of-arrays storage for the cards of one carousel.
///
/// Cards are addressed by [`CardId`] handles. Destroyed cards are recycled
/// via a free list, and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct CardStore {
    // -- Local properties (set by callers) --
    pub(crate) local_transform: Vec<Transform3d>,
    pub(crate) interactive: Vec<bool>,
    pub(crate) content: Vec<Option<SurfaceId>>,

    // -- Computed properties (written by evaluate) --
    pub(crate) world_transform: Vec<Transform3d>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) alive: Vec<bool>,
    pub(crate) free_list: Vec<u32>,

    // -- Ordering --
    pub(crate) order: Vec<u32>,
    pub(crate) order_dirty: bool,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
    pub(crate) transition_duration: f64,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CardStore {
    /// Creates a store holding only the stage, with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            local_transform: alloc::vec![Transform3d::IDENTITY],
            interactive: alloc::vec![false],
            content: alloc::vec![None],
            world_transform: alloc::vec![Transform3d::IDENTITY],
            generation: alloc::vec![0],
            alive: alloc::vec![true],
            free_list: Vec::new(),
            order: Vec::new(),
            order_dirty: false,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
            transition_duration: 0.0,
        }
    }

    // -- Allocation API --

    /// Creates a card at the end of the carousel order.
    ///
    /// The card starts with an identity transform, no content, and is not
    /// interactive.
    pub fn create_card(&mut self) -> CardId {
        let position = self.order.len();
        self.insert_card(position)
    }

    /// Creates a card at `position` in the carousel order, shifting later
    /// cards back by one.
    ///
    /// # Panics
    ///
    /// Panics if `position > self.len()`.
    pub fn insert_card(&mut self, position: usize) -> CardId {
        assert!(
            position <= self.order.len(),
            "insert position {position} out of range (len {})",
            self.order.len()
        );
        let idx = if let Some(idx) = self.free_list.pop() {
            let i = idx as usize;
            self.generation[i] += 1;
            self.local_transform[i] = Transform3d::IDENTITY;
            self.interactive[i] = false;
            self.content[i] = None;
            self.world_transform[i] = Transform3d::IDENTITY;
            self.alive[i] = true;
            idx
        } else {
            let idx = self.slot_count();
            self.local_transform.push(Transform3d::IDENTITY);
            self.interactive.push(false);
            self.content.push(None);
            self.world_transform.push(Transform3d::IDENTITY);
            self.generation.push(0);
            self.alive.push(true);
            idx
        };

        self.order.insert(position, idx);
        self.order_dirty = true;
        self.pending_added.push(idx);

        // World transform depends on the stage.
        let _ = self.dirty.add_dependency(idx, STAGE, dirty::TRANSFORM);
        self.dirty.mark(idx, dirty::TRANSFORM);
        self.dirty.mark(idx, dirty::TOPOLOGY);

        CardId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a card, removing it from the order and freeing its slot.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_card(&mut self, id: CardId) {
        self.validate(id);
        let idx = id.idx;
        self.order.retain(|&slot| slot != idx);
        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.alive[idx as usize] = false;
        self.content[idx as usize] = None;

        self.free_list.push(idx);
        self.order_dirty = true;
        // A card created since the last evaluate was never presented.
        if let Some(pos) = self.pending_added.iter().position(|&slot| slot == idx) {
            self.pending_added.remove(pos);
        } else {
            self.pending_removed.push(idx);
        }
        self.dirty.mark(STAGE, dirty::TOPOLOGY);
    }

    /// Returns whether the given handle refers to a live card.
    #[must_use]
    pub fn is_alive(&self, id: CardId) -> bool {
        id.idx != STAGE
            && id.idx < self.slot_count()
            && self.alive[id.idx as usize]
            && self.generation[id.idx as usize] == id.generation
    }

    // -- Ordering API --

    /// Number of live cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Moves a card to `position` in the carousel order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or `position >= self.len()`.
    pub fn move_card(&mut self, id: CardId, position: usize) {
        self.validate(id);
        assert!(
            position < self.order.len(),
            "move position {position} out of range (len {})",
            self.order.len()
        );
        let Some(current) = self.order.iter().position(|&slot| slot == id.idx) else {
            unreachable!("live card missing from order");
        };
        if current == position {
            return;
        }
        let idx = self.order.remove(current);
        self.order.insert(position, idx);
        self.order_dirty = true;
        self.dirty.mark(idx, dirty::TOPOLOGY);
    }

    /// Returns the card at `position` in the carousel order.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<CardId> {
        self.order.get(position).map(|&idx| self.handle(idx))
    }

    /// Returns the position of a card in the carousel order.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn position(&self, id: CardId) -> usize {
        self.validate(id);
        self.order
            .iter()
            .position(|&slot| slot == id.idx)
            .unwrap_or_else(|| unreachable!("live card missing from order"))
    }

    /// Returns the cards in carousel order.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().map(|&idx| self.handle(idx))
    }

    /// Returns the raw slot indices in carousel order.
    #[must_use]
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the stage transform shared by every card.
    #[must_use]
    pub fn stage_transform(&self) -> Transform3d {
        self.local_transform[STAGE as usize]
    }

    /// Returns the local transform of a card.
    #[must_use]
    pub fn local_transform(&self, id: CardId) -> Transform3d {
        self.validate(id);
        self.local_transform[id.idx as usize]
    }

    /// Returns whether a card accepts pointer input.
    #[must_use]
    pub fn is_interactive(&self, id: CardId) -> bool {
        self.validate(id);
        self.interactive[id.idx as usize]
    }

    /// Returns the surface content of a card.
    #[must_use]
    pub fn content(&self, id: CardId) -> Option<SurfaceId> {
        self.validate(id);
        self.content[id.idx as usize]
    }

    /// Returns the computed world transform of a card.
    ///
    /// Only valid after [`evaluate`](Self::evaluate) has been called.
    #[must_use]
    pub fn world_transform(&self, id: CardId) -> Transform3d {
        self.validate(id);
        self.world_transform[id.idx as usize]
    }

    /// Returns the transition duration that will accompany the next
    /// [`FrameChanges`](super::FrameChanges).
    #[must_use]
    pub fn transition_duration(&self) -> f64 {
        self.transition_duration
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the stage transform.
    ///
    /// Marks the TRANSFORM channel with eager propagation to every card.
    pub fn set_stage_transform(&mut self, transform: Transform3d) {
        if self.local_transform[STAGE as usize] == transform {
            return;
        }
        self.local_transform[STAGE as usize] = transform;
        self.dirty.mark_with(STAGE, dirty::TRANSFORM, &EagerPolicy);
    }

    /// Sets the local transform of a card. Unchanged values are not marked.
    pub fn set_transform(&mut self, id: CardId, transform: Transform3d) {
        self.validate(id);
        if self.local_transform[id.idx as usize] == transform {
            return;
        }
        self.local_transform[id.idx as usize] = transform;
        self.dirty.mark(id.idx, dirty::TRANSFORM);
    }

    /// Sets whether a card accepts pointer input. Unchanged values are not
    /// marked.
    pub fn set_interactive(&mut self, id: CardId, interactive: bool) {
        self.validate(id);
        if self.interactive[id.idx as usize] == interactive {
            return;
        }
        self.interactive[id.idx as usize] = interactive;
        self.dirty.mark(id.idx, dirty::INTERACTION);
    }

    /// Sets the surface content of a card.
    pub fn set_content(&mut self, id: CardId, content: Option<SurfaceId>) {
        self.validate(id);
        self.content[id.idx as usize] = content;
        self.dirty.mark(id.idx, dirty::CONTENT);
    }

    /// Sets the duration presenters should animate the next changes over.
    pub fn set_transition_duration(&mut self, seconds: f64) {
        self.transition_duration = seconds;
    }

    // -- Raw-index accessors for presenters --
    //
    // These accept raw slot indices (as found in `FrameChanges` or
    // `order()`) rather than `CardId` handles, skipping generation checks.

    /// Returns the computed world transform at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn world_transform_at(&self, idx: u32) -> Transform3d {
        self.check_slot(idx);
        self.world_transform[idx as usize]
    }

    /// Returns the interactive flag at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn interactive_at(&self, idx: u32) -> bool {
        self.check_slot(idx);
        self.interactive[idx as usize]
    }

    /// Returns the surface content at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn content_at(&self, idx: u32) -> Option<SurfaceId> {
        self.check_slot(idx);
        self.content[idx as usize]
    }

    /// Returns the handle for raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn handle(&self, idx: u32) -> CardId {
        self.check_slot(idx);
        CardId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    // -- Internal helpers --

    #[expect(
        clippy::cast_possible_truncation,
        reason = "slot counts are bounded by u32 handles"
    )]
    fn slot_count(&self) -> u32 {
        self.generation.len() as u32
    }

    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.slot_count(),
            "slot index {idx} out of range (len {})",
            self.slot_count()
        );
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: CardId) {
        assert!(
            self.is_alive(id),
            "stale CardId: {id:?} (current gen: {})",
            self.generation
                .get(id.idx as usize)
                .copied()
                .unwrap_or(u32::MAX)
        );
    }
}
