// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for carousel interaction.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Carousel`](crate::Carousel) controller calls as gestures and item
//! changes flow through it. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why the offset was snapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettleReason {
    /// A drag gesture ended.
    DragEnded,
    /// The number of items changed.
    CountChanged,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every drag update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    /// Cumulative horizontal translation of the gesture.
    pub translation_x: f64,
    /// Offset before the update, in degrees.
    pub from: f64,
    /// Offset after the update, in degrees.
    pub to: f64,
}

/// Emitted when the offset is snapped to a slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleEvent {
    /// What triggered the snap.
    pub reason: SettleReason,
    /// Offset before snapping.
    pub from: f64,
    /// Snapped offset.
    pub to: f64,
    /// Transition duration in seconds.
    pub duration: f64,
    /// Card count the snap was computed for.
    pub count: usize,
}

/// Emitted after the item sequence is reconciled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemsChangedEvent {
    /// Cards created for new items.
    pub inserted: usize,
    /// Cards destroyed for vanished items.
    pub removed: usize,
    /// Cards re-rendered because their item changed.
    pub refreshed: usize,
    /// Item count after the change.
    pub count: usize,
}

/// Emitted after the card store is evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluateEvent {
    /// Monotonic update counter.
    pub update_index: u64,
    /// Cards whose world transform changed.
    pub transforms: usize,
    /// Cards whose interactive flag changed.
    pub interactivity: usize,
    /// Index of the front card, if any.
    pub front_index: Option<usize>,
    /// Transition duration carried by the changes.
    pub transition_duration: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the carousel.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for every drag update.
    fn on_drag(&mut self, e: &DragEvent) {
        _ = e;
    }

    /// Called when the offset is snapped.
    fn on_settle(&mut self, e: &SettleEvent) {
        _ = e;
    }

    /// Called after the items are reconciled.
    fn on_items_changed(&mut self, e: &ItemsChangedEvent) {
        _ = e;
    }

    /// Called after each store evaluation.
    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`DragEvent`].
    #[inline]
    pub fn drag(&mut self, e: &DragEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SettleEvent`].
    #[inline]
    pub fn settle(&mut self, e: &SettleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_settle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ItemsChangedEvent`].
    #[inline]
    pub fn items_changed(&mut self, e: &ItemsChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_items_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EvaluateEvent`].
    #[inline]
    pub fn evaluate(&mut self, e: &EvaluateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_evaluate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        drags: usize,
        settles: usize,
    }

    impl TraceSink for CountingSink {
        fn on_drag(&mut self, _e: &DragEvent) {
            self.drags += 1;
        }

        fn on_settle(&mut self, _e: &SettleEvent) {
            self.settles += 1;
        }
    }

    fn drag() -> DragEvent {
        DragEvent {
            translation_x: 10.0,
            from: 0.0,
            to: 3.5,
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        let mut tracer = Tracer::new(&mut sink);
        tracer.drag(&drag());
        tracer.items_changed(&ItemsChangedEvent {
            inserted: 1,
            removed: 0,
            refreshed: 0,
            count: 1,
        });
    }

    #[test]
    fn none_tracer_is_silent() {
        let mut tracer = Tracer::none();
        tracer.drag(&drag());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_when_enabled() {
        let mut sink = CountingSink::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.drag(&drag());
            tracer.drag(&drag());
            tracer.settle(&SettleEvent {
                reason: SettleReason::DragEnded,
                from: 3.5,
                to: 0.0,
                duration: 0.2,
                count: 7,
            });
        }
        assert_eq!(sink.drags, 2);
        assert_eq!(sink.settles, 1);
    }

    #[cfg(not(feature = "trace"))]
    #[test]
    fn tracer_compiles_out_when_disabled() {
        let mut sink = CountingSink::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.drag(&drag());
        }
        assert_eq!(sink.drags, 0);
        assert_eq!(sink.settles, 0);
    }
}
