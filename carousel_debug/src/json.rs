// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON event log exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes them as a JSON array, one object per event, each tagged with a
//! `"type"` field.

use std::io::{self, Write};

use serde_json::{Value, json};

use carousel_core::trace::SettleReason;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes).map(|e| to_value(&e)).collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

/// Converts one recorded event into its JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Drag(e) => json!({
            "type": "drag",
            "translation_x": e.translation_x,
            "from": e.from,
            "to": e.to,
        }),
        RecordedEvent::Settle(e) => json!({
            "type": "settle",
            "reason": reason_name(e.reason),
            "from": e.from,
            "to": e.to,
            "duration": e.duration,
            "count": e.count,
        }),
        RecordedEvent::ItemsChanged(e) => json!({
            "type": "items_changed",
            "inserted": e.inserted,
            "removed": e.removed,
            "refreshed": e.refreshed,
            "count": e.count,
        }),
        RecordedEvent::Evaluate(e) => json!({
            "type": "evaluate",
            "update_index": e.update_index,
            "transforms": e.transforms,
            "interactivity": e.interactivity,
            "front_index": e.front_index,
            "transition_duration": e.transition_duration,
        }),
    }
}

fn reason_name(reason: SettleReason) -> &'static str {
    match reason {
        SettleReason::DragEnded => "drag_ended",
        SettleReason::CountChanged => "count_changed",
    }
}
