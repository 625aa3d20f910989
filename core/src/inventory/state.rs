//! inventory/state.rs
//! Mark state machine: `idle` <-> `open`.
//!
//! Rules:
//! - At most one mark is open.
//! - Starting a mark while one is open closes the open one at the new start offset.
//! - Ending while idle records nothing.
//! - Completed marks are append-only, in completion order.

use crate::inventory::segment::StreamSegment;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PartialMark {
    label: String,
    start: u64,
}

impl PartialMark {
    fn complete(self, end: u64) -> StreamSegment {
        StreamSegment::new(self.label, self.start, end)
    }
}

/// Single-owner tracker for one parse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsingState {
    current: Option<PartialMark>,
    completed: Vec<StreamSegment>,
}

impl ParsingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a mark at `position`, closing any open mark there first.
    pub fn mark_start(&mut self, label: impl Into<String>, position: u64) {
        if let Some(open) = self.current.take() {
            self.completed.push(open.complete(position));
        }
        self.current = Some(PartialMark { label: label.into(), start: position });
    }

    /// Close the open mark at `position`. Returns the completed segment, or
    /// `None` when idle.
    pub fn mark_end(&mut self, position: u64) -> Option<&StreamSegment> {
        let open = self.current.take()?;
        self.completed.push(open.complete(position));
        self.completed.last()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.label.as_str())
    }

    /// Completed segments; an open mark is not included.
    pub fn dump(&self) -> Vec<StreamSegment> {
        self.completed.clone()
    }
}
