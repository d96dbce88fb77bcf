//! Progress events and the timestamp index.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// One NDJSON progress event, written to stdout as generation proceeds.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ProgressEvent {
    Loading,
    Generating {
        #[serde(rename = "segmentIndex")]
        segment_index: usize,
        #[serde(rename = "sectionId")]
        section_id: String,
        #[serde(
            rename = "estRemainingSeconds",
            skip_serializing_if = "Option::is_none"
        )]
        est_remaining_seconds: Option<f64>,
    },
    Saving,
    Done,
}

impl ProgressEvent {
    /// Serialize this event as one JSON line and flush it.
    pub fn emit(&self, sink: &mut dyn Write) -> std::io::Result<()> {
        let line = serde_json::to_string(self).map_err(std::io::Error::other)?;
        writeln!(sink, "{line}")?;
        sink.flush()
    }
}

/// Time range covered by one contiguous run of units sharing a section id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionTimestamp {
    pub section_id: String,
    pub start_time: f64,
    pub end_time: f64,
}
