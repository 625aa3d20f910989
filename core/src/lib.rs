//! crx-core
//!
//! Reader and writer for CRX extension containers (CRX2 and CRX3).
//! Parses the framing header into `Metadata` and packs an opaque payload
//! behind a signed header. The payload itself is never inspected.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod crypto;
pub mod headers;
pub mod inventory;
pub mod source;

// Container layers
pub mod parser;
pub mod packer;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{derive_id, BasicSigner, KeyPair, SignError, Signer};
    pub use crate::headers::{AsymmetricKeyProof, CrxFileHeader, FileHeader, ProofAlgorithm};
    pub use crate::inventory::StreamSegment;
    pub use crate::packer::{CrxPacker, PackError, PackOptions};
    pub use crate::parser::{ContainerVersion, CrxInventory, CrxParser, Metadata, ParseError};
    pub use crate::source::{BufferedSource, FileSource, InputSource};
    pub use crate::types::CrxError;
}
