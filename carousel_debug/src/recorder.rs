// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`]. Counts are stored as `u64` and
//! angles and durations as `f64` bit patterns.

use carousel_core::trace::{
    DragEvent, EvaluateEvent, ItemsChangedEvent, SettleEvent, SettleReason, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_DRAG: u8 = 1;
const TAG_SETTLE: u8 = 2;
const TAG_ITEMS_CHANGED: u8 = 3;
const TAG_EVALUATE: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_count(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_option_count(&mut self, v: Option<usize>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_count(val);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn write_reason(&mut self, r: SettleReason) {
        self.write_u8(match r {
            SettleReason::DragEnded => 0,
            SettleReason::CountChanged => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_drag(&mut self, e: &DragEvent) {
        self.write_u8(TAG_DRAG);
        self.write_f64(e.translation_x);
        self.write_f64(e.from);
        self.write_f64(e.to);
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.write_u8(TAG_SETTLE);
        self.write_reason(e.reason);
        self.write_f64(e.from);
        self.write_f64(e.to);
        self.write_f64(e.duration);
        self.write_count(e.count);
    }

    fn on_items_changed(&mut self, e: &ItemsChangedEvent) {
        self.write_u8(TAG_ITEMS_CHANGED);
        self.write_count(e.inserted);
        self.write_count(e.removed);
        self.write_count(e.refreshed);
        self.write_count(e.count);
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.write_u8(TAG_EVALUATE);
        self.write_u64(e.update_index);
        self.write_count(e.transforms);
        self.write_count(e.interactivity);
        self.write_option_count(e.front_index);
        self.write_f64(e.transition_duration);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`DragEvent`].
    Drag(DragEvent),
    /// A [`SettleEvent`].
    Settle(SettleEvent),
    /// An [`ItemsChangedEvent`].
    ItemsChanged(ItemsChangedEvent),
    /// An [`EvaluateEvent`].
    Evaluate(EvaluateEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_count(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_option_count(&mut self) -> Option<Option<usize>> {
        let present = self.read_u8()?;
        let val = self.read_count()?;
        Some((present != 0).then_some(val))
    }

    fn read_reason(&mut self) -> Option<SettleReason> {
        Some(match self.read_u8()? {
            0 => SettleReason::DragEnded,
            _ => SettleReason::CountChanged,
        })
    }

    fn decode_drag(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Drag(DragEvent {
            translation_x: self.read_f64()?,
            from: self.read_f64()?,
            to: self.read_f64()?,
        }))
    }

    fn decode_settle(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Settle(SettleEvent {
            reason: self.read_reason()?,
            from: self.read_f64()?,
            to: self.read_f64()?,
            duration: self.read_f64()?,
            count: self.read_count()?,
        }))
    }

    fn decode_items_changed(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ItemsChanged(ItemsChangedEvent {
            inserted: self.read_count()?,
            removed: self.read_count()?,
            refreshed: self.read_count()?,
            count: self.read_count()?,
        }))
    }

    fn decode_evaluate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Evaluate(EvaluateEvent {
            update_index: self.read_u64()?,
            transforms: self.read_count()?,
            interactivity: self.read_count()?,
            front_index: self.read_option_count()?,
            transition_duration: self.read_f64()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_DRAG => self.decode_drag(),
            TAG_SETTLE => self.decode_settle(),
            TAG_ITEMS_CHANGED => self.decode_items_changed(),
            TAG_EVALUATE => self.decode_evaluate(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
