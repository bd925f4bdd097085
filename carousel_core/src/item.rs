// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Items shown on the carousel and how their content becomes surfaces.

use crate::card::SurfaceId;

/// A value shown on one card.
///
/// Items are matched across [`Carousel::set_items`](crate::Carousel::set_items)
/// calls by [`id`](Self::id). Two items with the same id but unequal values
/// cause the card to be re-rendered in place.
pub trait CarouselItem: Clone + PartialEq {
    /// Stable identity of the item.
    type Id: Ord + Clone;

    /// Returns the identity of this item.
    fn id(&self) -> Self::Id;
}

/// Renders item content into presenter-owned surfaces.
///
/// Any `FnMut(&T) -> SurfaceId` closure is a renderer that never releases.
pub trait ContentRenderer<T> {
    /// Renders `item` and returns the surface holding the result.
    fn render(&mut self, item: &T) -> SurfaceId;

    /// Releases a surface previously returned by [`render`](Self::render).
    fn release(&mut self, surface: SurfaceId) {
        _ = surface;
    }
}

impl<T, F> ContentRenderer<T> for F
where
    F: FnMut(&T) -> SurfaceId,
{
    fn render(&mut self, item: &T) -> SurfaceId {
        self(item)
    }
}
