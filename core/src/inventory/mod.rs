//! inventory/mod.rs
//! Observational record of which byte ranges a parse consumed.
//!
//! Notes:
//! - Purely diagnostic: parsing with or without a tracker yields the same metadata.
//! - A `CountingReader` owns the position; a `ParsingState` turns labelled marks
//!   into `StreamSegment`s; a `SegmentMark` guard closes its mark on drop.

pub mod segment;
pub mod state;
pub mod reader;

pub use segment::*;
pub use state::*;
pub use reader::*;
