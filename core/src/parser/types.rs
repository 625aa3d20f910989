// ## 📂 File: `src/parser/types.rs`

//! parser/types.rs
//! Container version registry, parsed metadata and parse errors.

use std::fmt;
use std::io;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{version_ids, MAGIC_CR24};
use crate::crypto::derive_id;
use crate::headers::{CrxFileHeader, FileHeader, ProofAlgorithm};
use crate::inventory::{segments_to_json, StreamSegment};
use crate::utils::{enum_name_or_hex, fmt_bytes};

/// Container format versions (little-endian u32 on the wire).
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ContainerVersion {
    Crx2 = version_ids::CRX2,
    Crx3 = version_ids::CRX3,
}

impl ContainerVersion {
    /// Wire identifier.
    pub const fn identifier(self) -> u32 {
        self as u32
    }

    pub fn from_raw(raw: u32) -> Result<Self, ParseError> {
        Self::try_from_primitive(raw).map_err(|_| ParseError::UnsupportedVersion { raw })
    }
}

impl fmt::Display for ContainerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerVersion::Crx2 => "CRX2",
            ContainerVersion::Crx3 => "CRX3",
        };
        f.write_str(name)
    }
}

/// Everything the framing header says about a container.
///
/// `id` always comes from the first `sha256_with_rsa` proof's public key, so a
/// value without such a proof cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    magic_number: String,
    version: ContainerVersion,
    header: FileHeader,
    id: String,
}

impl Metadata {
    /// Assemble metadata, deriving the identifier from the header.
    pub fn new(version: ContainerVersion, header: FileHeader) -> Result<Self, ParseError> {
        let algorithm = ProofAlgorithm::Sha256WithRsa;
        let id = header
            .proofs(algorithm)
            .first()
            .map(|proof| derive_id(proof.public_key()))
            .ok_or(ParseError::MissingProof { algorithm })?;
        Ok(Self::from_parts(version, header, id))
    }

    // Packers already hold the identifier they derived.
    pub(crate) fn from_parts(version: ContainerVersion, header: FileHeader, id: String) -> Self {
        Self {
            magic_number: String::from_utf8_lossy(&MAGIC_CR24).into_owned(),
            version,
            header,
            id,
        }
    }

    pub fn magic_number(&self) -> &str {
        &self.magic_number
    }

    pub fn version(&self) -> ContainerVersion {
        self.version
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metadata{{id={}, magic={}, version={}, header={}}}",
            self.id, self.magic_number, self.version, self.header
        )
    }
}

/// Parsed metadata plus the byte ranges consumed to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct CrxInventory {
    pub metadata: Metadata,
    pub segments: Vec<StreamSegment>,
}

impl CrxInventory {
    /// Offset of the first payload byte.
    pub fn payload_offset(&self) -> u64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    pub fn segments_json(&self) -> Result<String, serde_json::Error> {
        segments_to_json(&self.segments)
    }
}

/// Parse failures.
///
/// A short read is never a format error: it stays an `Io` error of kind
/// `UnexpectedEof` so callers can tell "not enough bytes" from "wrong format".
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid magic number: expected {}, got {}", fmt_bytes(&MAGIC_CR24), fmt_bytes(have))]
    InvalidMagicNumber { have: [u8; 4] },

    #[error("unsupported version: {}", enum_name_or_hex::<ContainerVersion>(*raw))]
    UnsupportedVersion { raw: u32 },

    #[error("parsing error: {field} length is insane: {have} (allowed 1..={max})")]
    InsaneLength { field: &'static str, have: u32, max: u32 },

    #[error("parsing error: no {algorithm} proof present")]
    MissingProof { algorithm: ProofAlgorithm },

    #[error("parsing error: undecodable file header: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Format-logic failure (the bytes are not a valid container).
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ParseError::Io(_))
    }

    /// The stream ended before the header did.
    pub fn is_eof(&self) -> bool {
        matches!(self, ParseError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
