//! parser/mod.rs
//! Container parser: magic, version, then the version's interpreter.
//!
//! Notes:
//! - Reads exactly the framing header and nothing more, so the caller's stream is
//!   left at the first payload byte.
//! - Every declared length is checked against its sane maximum before a buffer
//!   is allocated for it.
//! - Dispatch is a closed match over `ContainerVersion`.

pub mod types;
pub mod v2;
pub mod v3;

pub use types::*;
pub use v2::Crx2Interpreter;
pub use v3::Crx3Interpreter;

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::constants::{segment_labels, MAGIC_CR24};
use crate::inventory::CountingReader;

/// Stateless parser; construct freely.
#[derive(Copy, Clone, Debug, Default)]
pub struct CrxParser;

impl CrxParser {
    pub const fn new() -> Self {
        CrxParser
    }

    /// Parse the framing header from `reader`, leaving it at the payload.
    pub fn parse<R: Read + ?Sized>(&self, reader: &mut R) -> Result<Metadata, ParseError> {
        self.parse_counted(&mut CountingReader::new(reader))
    }

    /// Parse and record which byte ranges each header field occupied.
    pub fn parse_inventory<R: Read + ?Sized>(&self, reader: &mut R) -> Result<CrxInventory, ParseError> {
        let mut counting = CountingReader::tracked(reader);
        let metadata = self.parse_counted(&mut counting)?;
        Ok(CrxInventory { metadata, segments: counting.segments() })
    }

    /// Parse through a caller-owned counting reader; `position()` afterwards is
    /// the payload offset.
    pub fn parse_counted<R: Read>(&self, reader: &mut CountingReader<R>) -> Result<Metadata, ParseError> {
        let mut magic = [0u8; 4];
        reader.segment(segment_labels::MAGIC_NUMBER).read_exact(&mut magic)?;
        if magic != MAGIC_CR24 {
            return Err(ParseError::InvalidMagicNumber { have: magic });
        }

        let raw = reader.segment(segment_labels::VERSION).read_u32::<LittleEndian>()?;
        let version = ContainerVersion::from_raw(raw)?;
        debug!(%version, "dispatching container header");

        let header = match version {
            ContainerVersion::Crx2 => Crx2Interpreter.interpret(reader)?,
            ContainerVersion::Crx3 => Crx3Interpreter.interpret(reader)?,
        };

        let metadata = Metadata::new(version, header)?;
        debug!(id = metadata.id(), payload_offset = reader.position(), "parsed container header");
        Ok(metadata)
    }
}

/// Accept `1..=max`, rejecting zero and anything larger.
pub(crate) fn sane_length(field: &'static str, have: u32, max: u32) -> Result<usize, ParseError> {
    if have == 0 || have > max {
        return Err(ParseError::InsaneLength { field, have, max });
    }
    Ok(have as usize)
}

pub(crate) fn read_exact_vec<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, ParseError> {
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}
