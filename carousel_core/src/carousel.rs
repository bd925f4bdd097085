// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: engine, items, and cards kept in step.
//!
//! [`Carousel`] owns a [`CarouselEngine`] and a [`CardStore`] and keeps one
//! card per item. Gestures go to the engine; [`Carousel::update`] writes the
//! engine's layout into the store and evaluates it into [`FrameChanges`]
//! for a [`Presenter`](crate::backend::Presenter).

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::card::{CardId, CardStore, FrameChanges};
use crate::config::CarouselConfig;
use crate::engine::CarouselEngine;
use crate::item::{CarouselItem, ContentRenderer};
use crate::layout::Placement;
use crate::motion::Motion;
use crate::trace::{
    DragEvent, EvaluateEvent, ItemsChangedEvent, SettleEvent, SettleReason, Tracer,
};
use crate::transform::Transform3d;

/// A 3D card carousel over items of type `T`.
#[derive(Debug)]
pub struct Carousel<T: CarouselItem> {
    config: CarouselConfig,
    engine: CarouselEngine,
    items: Vec<T>,
    // Parallel to `items`.
    cards: Vec<CardId>,
    store: CardStore,
    update_index: u64,
}

impl<T: CarouselItem> Carousel<T> {
    /// Creates an empty carousel.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`CarouselConfig::validate`].
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let engine = CarouselEngine::new(&config);
        let mut store = CardStore::new();
        store.set_stage_transform(Transform3d::from_perspective(config.perspective_distance));
        Self {
            config,
            engine,
            items: Vec::new(),
            cards: Vec::new(),
            store,
            update_index: 0,
        }
    }

    /// Replaces the item sequence.
    ///
    /// Items are matched to existing cards by [`CarouselItem::id`]. A kept
    /// item reuses its card and is re-rendered only if it compares unequal to
    /// its previous value. New items get a fresh card and surface. Cards of
    /// vanished items are destroyed and their surfaces released. If an id
    /// appears more than once, only its first occurrence keeps the old card.
    ///
    /// When the count changes the engine re-snaps for the new count.
    pub fn set_items<R>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        renderer: &mut R,
        tracer: &mut Tracer<'_>,
    ) where
        R: ContentRenderer<T> + ?Sized,
    {
        let new_items: Vec<T> = items.into_iter().collect();
        let old_count = self.items.len();

        let mut previous: BTreeMap<T::Id, usize> = BTreeMap::new();
        for (i, item) in self.items.iter().enumerate() {
            previous.entry(item.id()).or_insert(i);
        }
        let mut kept = alloc::vec![false; old_count];

        let mut inserted = 0;
        let mut refreshed = 0;
        let mut new_cards = Vec::with_capacity(new_items.len());
        for item in &new_items {
            if let Some(old) = previous.remove(&item.id()) {
                kept[old] = true;
                let card = self.cards[old];
                if self.items[old] != *item {
                    if let Some(surface) = self.store.content(card) {
                        renderer.release(surface);
                    }
                    self.store.set_content(card, Some(renderer.render(item)));
                    refreshed += 1;
                }
                new_cards.push(card);
            } else {
                let card = self.store.create_card();
                self.store.set_content(card, Some(renderer.render(item)));
                new_cards.push(card);
                inserted += 1;
            }
        }

        let mut removed = 0;
        for (card, _) in self.cards.iter().zip(&kept).filter(|(_, kept)| !**kept) {
            if let Some(surface) = self.store.content(*card) {
                renderer.release(surface);
            }
            self.store.destroy_card(*card);
            removed += 1;
        }

        for (position, card) in new_cards.iter().enumerate() {
            self.store.move_card(*card, position);
        }

        self.items = new_items;
        self.cards = new_cards;
        let count = self.items.len();

        tracer.items_changed(&ItemsChangedEvent {
            inserted,
            removed,
            refreshed,
            count,
        });

        if count != old_count && count > 0 {
            let motion = self.engine.item_count_changed(count);
            tracer.settle(&SettleEvent {
                reason: SettleReason::CountChanged,
                from: motion.from,
                to: motion.to,
                duration: motion.duration,
                count,
            });
        }
    }

    /// Appends an item.
    pub fn push<R>(&mut self, item: T, renderer: &mut R, tracer: &mut Tracer<'_>)
    where
        R: ContentRenderer<T> + ?Sized,
    {
        let mut items = self.items.clone();
        items.push(item);
        self.set_items(items, renderer, tracer);
    }

    /// Removes and returns the last item, if any.
    pub fn pop<R>(&mut self, renderer: &mut R, tracer: &mut Tracer<'_>) -> Option<T>
    where
        R: ContentRenderer<T> + ?Sized,
    {
        let mut items = self.items.clone();
        let last = items.pop()?;
        self.set_items(items, renderer, tracer);
        Some(last)
    }

    /// Tracks a drag with cumulative translation `translation_x`.
    pub fn drag_changed(&mut self, translation_x: f64, tracer: &mut Tracer<'_>) -> Motion {
        let motion = self.engine.drag_changed(translation_x);
        tracer.drag(&DragEvent {
            translation_x,
            from: motion.from,
            to: motion.to,
        });
        motion
    }

    /// Ends a drag and snaps to the nearest slot.
    pub fn drag_ended(&mut self, final_translation_x: f64, tracer: &mut Tracer<'_>) -> Motion {
        let count = self.items.len();
        let motion = self.engine.drag_ended(final_translation_x, count);
        tracer.settle(&SettleEvent {
            reason: SettleReason::DragEnded,
            from: motion.from,
            to: motion.to,
            duration: motion.duration,
            count,
        });
        motion
    }

    /// Writes the current layout into the card store and evaluates it.
    ///
    /// Returns the changes a presenter should apply, together with the
    /// transition duration to animate them over.
    pub fn update(&mut self, tracer: &mut Tracer<'_>) -> FrameChanges {
        let placements = self.engine.layout_count(self.cards.len());
        for (card, placement) in self.cards.iter().zip(&placements) {
            self.store.set_transform(*card, placement.transform());
            self.store.set_interactive(*card, placement.is_interactive);
        }
        self.store
            .set_transition_duration(self.engine.transition_duration());

        let changes = self.store.evaluate();
        self.update_index += 1;
        tracer.evaluate(&EvaluateEvent {
            update_index: self.update_index,
            transforms: changes.transforms.len(),
            interactivity: changes.interactivity.len(),
            front_index: self.engine.front_index(self.items.len()),
            transition_duration: changes.transition_duration,
        });
        changes
    }

    /// The item nearest the front, or `None` when empty.
    #[must_use]
    pub fn front_item(&self) -> Option<&T> {
        self.engine
            .front_index(self.items.len())
            .map(|i| &self.items[i])
    }

    /// The current items, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The card showing the item at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Placements for the current offset, one per item.
    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        self.engine.layout(&self.items)
    }

    /// The rotation engine.
    #[must_use]
    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    /// The card store presenters read from.
    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// The configuration this carousel was created with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::SurfaceId;

    #[derive(Clone, Debug, PartialEq)]
    struct Tile {
        id: u32,
        label: &'static str,
    }

    impl CarouselItem for Tile {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn tile(id: u32) -> Tile {
        Tile { id, label: "card" }
    }

    #[derive(Default)]
    struct Surfaces {
        next: u32,
        released: Vec<SurfaceId>,
    }

    impl ContentRenderer<Tile> for Surfaces {
        fn render(&mut self, _item: &Tile) -> SurfaceId {
            self.next += 1;
            SurfaceId(self.next)
        }

        fn release(&mut self, surface: SurfaceId) {
            self.released.push(surface);
        }
    }

    fn seven() -> (Carousel<Tile>, Surfaces) {
        let mut carousel = Carousel::new(CarouselConfig::standard());
        let mut surfaces = Surfaces::default();
        carousel.set_items((0..7).map(tile), &mut surfaces, &mut Tracer::none());
        (carousel, surfaces)
    }

    #[test]
    fn set_items_creates_one_card_per_item() {
        let (carousel, surfaces) = seven();
        assert_eq!(carousel.store().len(), 7);
        assert_eq!(surfaces.next, 7);
        let order: Vec<_> = carousel.store().cards().collect();
        let cards: Vec<_> = (0..7).filter_map(|i| carousel.card(i)).collect();
        assert_eq!(order, cards);
    }

    #[test]
    fn kept_items_reuse_cards() {
        let (mut carousel, mut surfaces) = seven();
        let first = carousel.card(0);
        carousel.set_items((0..7).map(tile), &mut surfaces, &mut Tracer::none());
        assert_eq!(carousel.card(0), first);
        assert_eq!(surfaces.next, 7, "unchanged items are not re-rendered");
    }

    #[test]
    fn changed_item_is_rerendered_in_place() {
        let (mut carousel, mut surfaces) = seven();
        let card = carousel.card(3);
        let mut items: Vec<Tile> = carousel.items().to_vec();
        items[3].label = "edited";
        carousel.set_items(items, &mut surfaces, &mut Tracer::none());
        assert_eq!(carousel.card(3), card);
        assert_eq!(surfaces.released, vec![SurfaceId(4)]);
        let content = card.map(|c| carousel.store().content(c));
        assert_eq!(content, Some(Some(SurfaceId(8))));
    }

    #[test]
    fn reorder_follows_items() {
        let (mut carousel, mut surfaces) = seven();
        let last = carousel.card(6);
        let items: Vec<Tile> = carousel.items().iter().rev().cloned().collect();
        carousel.set_items(items, &mut surfaces, &mut Tracer::none());
        assert_eq!(carousel.card(0), last);
        assert_eq!(carousel.store().card_at(0), last);
        assert_eq!(carousel.engine().offset(), 0.0);
    }

    #[test]
    fn pop_releases_and_resnaps() {
        let (mut carousel, mut surfaces) = seven();
        carousel.drag_changed(100.0, &mut Tracer::none());
        carousel.drag_ended(100.0, &mut Tracer::none());

        let popped = carousel.pop(&mut surfaces, &mut Tracer::none());
        assert_eq!(popped, Some(tile(6)));
        assert_eq!(surfaces.released, vec![SurfaceId(7)]);
        assert_eq!(carousel.store().len(), 6);
        assert_eq!(carousel.engine().offset(), 60.0);
        assert_eq!(carousel.engine().transition_duration(), 0.2);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut carousel: Carousel<Tile> = Carousel::new(CarouselConfig::standard());
        let mut surfaces = Surfaces::default();
        assert_eq!(carousel.pop(&mut surfaces, &mut Tracer::none()), None);
    }

    #[test]
    fn push_appends_a_card() {
        let (mut carousel, mut surfaces) = seven();
        carousel.push(tile(7), &mut surfaces, &mut Tracer::none());
        assert_eq!(carousel.items().len(), 8);
        assert_eq!(carousel.store().card_at(7), carousel.card(7));
    }

    #[test]
    fn push_pop_push_reports_one_new_card() {
        let (mut carousel, mut surfaces) = seven();
        let _ = carousel.update(&mut Tracer::none());

        carousel.push(tile(7), &mut surfaces, &mut Tracer::none());
        let _ = carousel.pop(&mut surfaces, &mut Tracer::none());
        carousel.push(tile(8), &mut surfaces, &mut Tracer::none());

        let changes = carousel.update(&mut Tracer::none());
        let card = carousel.card(7).map(|c| c.index());
        assert_eq!(changes.added.iter().copied().map(Some).collect::<Vec<_>>(), vec![card]);
        assert!(changes.removed.is_empty(), "{changes:?}");
        assert_eq!(carousel.store().len(), 8);
    }

    #[test]
    fn update_marks_exactly_one_interactive_card() {
        let (mut carousel, _) = seven();
        let changes = carousel.update(&mut Tracer::none());
        assert_eq!(changes.added.len(), 7);
        let store = carousel.store();
        let interactive: Vec<_> = store.cards().filter(|c| store.is_interactive(*c)).collect();
        assert_eq!(interactive, vec![carousel.card(0).unwrap()]);
        assert_eq!(carousel.front_item(), Some(&tile(0)));
    }

    #[test]
    fn drag_updates_have_zero_duration() {
        let (mut carousel, _) = seven();
        let _ = carousel.update(&mut Tracer::none());
        carousel.drag_changed(30.0, &mut Tracer::none());
        let changes = carousel.update(&mut Tracer::none());
        assert_eq!(changes.transition_duration, 0.0);
        assert_eq!(changes.transforms.len(), 7);
        // Front card stops facing the viewer mid-drag.
        assert_eq!(changes.interactivity.len(), 1);

        carousel.drag_ended(30.0, &mut Tracer::none());
        let changes = carousel.update(&mut Tracer::none());
        assert_eq!(changes.transition_duration, 0.2);
    }

    #[test]
    fn clearing_items_keeps_offset() {
        let (mut carousel, mut surfaces) = seven();
        carousel.drag_changed(100.0, &mut Tracer::none());
        carousel.drag_ended(100.0, &mut Tracer::none());
        let offset = carousel.engine().offset();
        carousel.set_items(Vec::new(), &mut surfaces, &mut Tracer::none());
        assert!(carousel.store().is_empty());
        assert_eq!(carousel.engine().offset(), offset);
        assert_eq!(carousel.front_item(), None);
        assert_eq!(surfaces.released.len(), 7);
    }

    #[test]
    fn closure_renderer() {
        let mut carousel = Carousel::new(CarouselConfig::standard());
        let mut render = |item: &Tile| SurfaceId(item.id + 100);
        carousel.set_items([tile(1)], &mut render, &mut Tracer::none());
        let card = carousel.card(0).unwrap();
        assert_eq!(carousel.store().content(card), Some(SurfaceId(101)));
    }
}
