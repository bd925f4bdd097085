// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Angles are
//! printed in degrees, durations in seconds.

use std::io::Write;

use carousel_core::trace::{
    DragEvent, EvaluateEvent, ItemsChangedEvent, SettleEvent, SettleReason, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn reason_name(reason: SettleReason) -> &'static str {
    match reason {
        SettleReason::DragEnded => "drag-ended",
        SettleReason::CountChanged => "count-changed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_drag(&mut self, e: &DragEvent) {
        let _ = writeln!(
            self.writer,
            "[drag] dx={:.1} offset={:.2}° -> {:.2}°",
            e.translation_x, e.from, e.to,
        );
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        let _ = writeln!(
            self.writer,
            "[settle] {} n={} offset={:.2}° -> {:.2}° over {:.2}s",
            reason_name(e.reason),
            e.count,
            e.from,
            e.to,
            e.duration,
        );
    }

    fn on_items_changed(&mut self, e: &ItemsChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[items] n={} +{} -{} ~{}",
            e.count, e.inserted, e.removed, e.refreshed,
        );
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        let front = match e.front_index {
            Some(i) => i.to_string(),
            None => "-".to_owned(),
        };
        let _ = writeln!(
            self.writer,
            "[eval] update={} transforms={} interactivity={} front={front} transition={:.2}s",
            e.update_index, e.transforms, e.interactivity, e.transition_duration,
        );
    }
}
