//! inventory/reader.rs
//! Position-counting reader with optional segment tracking.

use std::io::{self, Read};

use tracing::trace;

use crate::inventory::segment::StreamSegment;
use crate::inventory::state::ParsingState;

/// Wraps a reader, counting consumed bytes. When tracking is on, labelled
/// segments opened through `segment()` are recorded in a `ParsingState`.
#[derive(Debug)]
pub struct CountingReader<R> {
    inner: R,
    position: u64,
    state: Option<ParsingState>,
}

impl<R> CountingReader<R> {
    /// Count bytes only; segment marks are no-ops.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0, state: None }
    }

    /// Count bytes and record segments.
    pub fn tracked(inner: R) -> Self {
        Self { inner, position: 0, state: Some(ParsingState::new()) }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// Open a labelled segment at the current position. It closes when the
    /// returned guard drops, or earlier if another segment is opened.
    pub fn segment(&mut self, label: &str) -> SegmentMark<'_, R> {
        let position = self.position;
        if let Some(state) = self.state.as_mut() {
            state.mark_start(label, position);
        }
        SegmentMark { reader: self }
    }

    /// Completed segments so far (empty when not tracking).
    pub fn segments(&self) -> Vec<StreamSegment> {
        self.state.as_ref().map(ParsingState::dump).unwrap_or_default()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn close_current(&mut self) {
        let position = self.position;
        if let Some(seg) = self.state.as_mut().and_then(|s| s.mark_end(position)) {
            trace!(label = %seg.label, start = seg.start, end = seg.end, "segment");
        }
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}

/// Scope guard for one open segment; reads pass through to the counting reader.
pub struct SegmentMark<'a, R> {
    reader: &'a mut CountingReader<R>,
}

impl<R: Read> Read for SegmentMark<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R> Drop for SegmentMark<'_, R> {
    fn drop(&mut self) {
        self.reader.close_current();
    }
}
