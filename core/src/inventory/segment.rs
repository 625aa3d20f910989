//! inventory/segment.rs
//! A labelled, half-open byte range `[start, end)` of the parsed stream.

use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSegment {
    pub label: String,
    pub start: u64,
    pub end: u64,
}

impl StreamSegment {
    pub fn new(label: impl Into<String>, start: u64, end: u64) -> Self {
        Self { label: label.into(), start, end }
    }

    pub fn length(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for StreamSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{}] ({} bytes)", self.label, self.start, self.end, self.length())
    }
}

/// Render segments as a JSON array for diagnostics dumps.
pub fn segments_to_json(segments: &[StreamSegment]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(segments)
}
