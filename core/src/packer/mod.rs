//! packer/mod.rs
//! Container writers, one per format version.
//!
//! Notes:
//! - Header and signature are fully computed before the first byte is written;
//!   a failure after that point leaves a partial file for the caller to remove.
//! - `CrxPacker` is the closed set of writers, selected by `ContainerVersion`.

pub mod types;
pub mod v2;
pub mod v3;

pub use types::*;
pub use v2::Crx2Packer;
pub use v3::{signing_input, Crx3Packer};

use std::io::Write;

use crate::crypto::KeyPair;
use crate::parser::{ContainerVersion, Metadata};
use crate::source::InputSource;

/// Writer for either container version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrxPacker {
    V2(Crx2Packer),
    V3(Crx3Packer),
}

impl Default for CrxPacker {
    fn default() -> Self {
        CrxPacker::V3(Crx3Packer::default())
    }
}

impl CrxPacker {
    pub fn for_version(version: ContainerVersion) -> Self {
        match version {
            ContainerVersion::Crx2 => CrxPacker::V2(Crx2Packer::default()),
            ContainerVersion::Crx3 => CrxPacker::V3(Crx3Packer::default()),
        }
    }

    pub fn version(&self) -> ContainerVersion {
        match self {
            CrxPacker::V2(_) => ContainerVersion::Crx2,
            CrxPacker::V3(_) => ContainerVersion::Crx3,
        }
    }

    /// Sign `payload` with `key_pair` and write the framed container to `output`.
    pub fn pack<S, W>(&self, payload: &S, key_pair: &KeyPair, output: &mut W) -> Result<Metadata, PackError>
    where
        S: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        self.pack_with(payload, key_pair, output, PackOptions::default())
    }

    pub fn pack_with<S, W>(
        &self,
        payload: &S,
        key_pair: &KeyPair,
        output: &mut W,
        options: PackOptions<'_>,
    ) -> Result<Metadata, PackError>
    where
        S: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        match self {
            CrxPacker::V2(p) => p.pack(payload, key_pair, output, options),
            CrxPacker::V3(p) => p.pack(payload, key_pair, output, options),
        }
    }
}

impl From<ContainerVersion> for CrxPacker {
    fn from(version: ContainerVersion) -> Self {
        Self::for_version(version)
    }
}

pub(crate) fn encoded_public_key(key_pair: &KeyPair) -> Result<Vec<u8>, PackError> {
    key_pair.public_key_der().map_err(|e| PackError::KeyEncoding(e.to_string()))
}

/// Length as its LE32 wire value, or `InsaneLength` outside `1..=max`.
pub(crate) fn sane_length(field: &'static str, have: usize, max: u32) -> Result<u32, PackError> {
    match u32::try_from(have) {
        Ok(len) if len != 0 && len <= max => Ok(len),
        _ => Err(PackError::InsaneLength { field, have, max }),
    }
}
