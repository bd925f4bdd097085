// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card and surface identity types.

use core::fmt;

/// A handle to a card in a [`CardStore`](super::CardStore).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a card is destroyed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl CardId {
    /// Returns the raw slot index (for diagnostics and `*_at` accessors).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({}@gen{})", self.idx, self.generation)
    }
}

/// An opaque reference to rendered card content.
///
/// Surfaces are produced by the host's
/// [`ContentRenderer`](crate::item::ContentRenderer); the store only passes
/// them through to presenters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

impl fmt::Debug for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceId({})", self.0)
    }
}
