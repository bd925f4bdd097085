// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The [`CardStore`](crate::card::CardStore) uses multi-channel dirty
//! tracking (via [`understory_dirty`]) so presenters only touch cards that
//! actually changed since the last evaluation.
//!
//! # Propagation semantics
//!
//! - [`TRANSFORM`] has a dependency edge from every card to the stage.
//!   Changing the stage transform (perspective, position of the whole
//!   carousel) is marked with
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) and reaches every card.
//! - [`INTERACTION`] and [`CONTENT`] are local-only.
//! - [`TOPOLOGY`] is marked when cards are created, destroyed, or moved. It
//!   is drained and discarded; the store keeps its own order flag.
//!
//! Callers never query dirty state directly: each
//! [`CardStore::evaluate`](crate::card::CardStore::evaluate) drains all
//! channels into [`FrameChanges`](crate::card::FrameChanges).

use understory_dirty::Channel;

/// Local or stage transform changed; world transform must be recomputed.
pub const TRANSFORM: Channel = Channel::new(0);

/// The interactive (front-facing) flag of a card changed.
pub const INTERACTION: Channel = Channel::new(1);

/// Surface content of a card changed.
pub const CONTENT: Channel = Channel::new(2);

/// Cards were created, destroyed, or reordered.
pub const TOPOLOGY: Channel = Channel::new(3);
