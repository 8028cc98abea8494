// Copyright 2026 the Viewsync Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] writes the records of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array, one object per event:
//!
//! ```json
//! { "seq": 0, "name": "ActiveLink", "cat": "Nav", "args": { ... } }
//! ```

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::pretty::{cause_name, progress_name, watch_name};
use crate::recorder::{Record, RecordedEvent};

/// Exports recorded events as a JSON array.
///
/// # Errors
///
/// Returns any error from serializing or writing to `writer`.
pub fn export(records: &[Record], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = records.iter().map(to_value).collect();
    serde_json::to_writer(&mut *writer, &Value::Array(events))?;
    writer.flush()
}

fn to_value(record: &Record) -> Value {
    let (cat, args) = match &record.event {
        RecordedEvent::ActiveLink(e) => (
            "Nav",
            json!({
                "from": e.from,
                "to": e.to,
                "cause": cause_name(e.cause),
            }),
        ),
        RecordedEvent::Indicator(e) => (
            "Nav",
            json!({
                "link": e.link,
                "width": e.placement.width,
                "x": e.placement.offset.x,
                "y": e.placement.offset.y,
            }),
        ),
        RecordedEvent::SidebarOffset(e) => ("Layout", json!({ "width": e.width })),
        RecordedEvent::FrameFlush(e) => (
            "Frame",
            json!({
                "frame_index": e.frame_index,
                "job_count": e.job_count,
            }),
        ),
        RecordedEvent::Watch(e) => (
            "Watch",
            json!({
                "kind": watch_name(e.kind),
                "index": e.index,
            }),
        ),
        RecordedEvent::Fallback(e) => (
            "Image",
            json!({
                "index": e.index,
                "placeholder": e.placeholder,
            }),
        ),
        RecordedEvent::Progress(e) => (
            "Progress",
            json!({
                "kind": progress_name(e.kind),
                "value": e.value,
            }),
        ),
    };
    json!({
        "seq": record.seq,
        "name": record.event.name(),
        "cat": cat,
        "args": args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use viewsync_core::nav::ActivationCause;
    use viewsync_core::trace::{
        ActiveLinkEvent, FrameFlushEvent, SidebarOffsetEvent, TraceSink, WatchEvent, WatchKind,
    };

    fn export_to_value(sink: &RecorderSink) -> Value {
        let mut out = Vec::new();
        export(sink.records(), &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn empty_recording_is_empty_array() {
        let sink = RecorderSink::new();
        assert_eq!(export_to_value(&sink), json!([]));
    }

    #[test]
    fn exports_in_sequence_order() {
        let mut sink = RecorderSink::new();
        sink.on_frame_flush(&FrameFlushEvent {
            frame_index: 0,
            job_count: 2,
        });
        sink.on_active_link(&ActiveLinkEvent {
            from: Some(0),
            to: 1,
            cause: ActivationCause::Scroll,
        });
        sink.on_watch(&WatchEvent {
            kind: WatchKind::TimelineItem,
            index: 5,
        });

        let value = export_to_value(&sink);
        let events = value.as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["name"], "FrameFlush");
        assert_eq!(events[0]["args"]["job_count"], 2);
        assert_eq!(events[1]["seq"], 1);
        assert_eq!(events[1]["cat"], "Nav");
        assert_eq!(events[1]["args"]["cause"], "scroll");
        assert_eq!(events[2]["args"]["kind"], "timeline");
        assert_eq!(events[2]["args"]["index"], 5);
    }

    #[test]
    fn cleared_sidebar_exports_null_width() {
        let mut sink = RecorderSink::new();
        sink.on_sidebar_offset(&SidebarOffsetEvent { width: None });
        let value = export_to_value(&sink);
        assert_eq!(value[0]["args"]["width"], Value::Null);
    }
}
