//! headers/encode.rs
//! Building CRX3 header messages.
//!
//! Design notes:
//! - `signed_header_data` is itself an encoded `SignedData` message; the packer
//!   signs those exact bytes, so they are produced once and reused verbatim.
//! - Proofs are written under `sha256_with_rsa` only; ECDSA signing is not offered.

use prost::Message;

use crate::headers::message;
use crate::headers::types::AsymmetricKeyProof;

/// Encode `SignedData { crx_id }`.
pub fn encode_signed_data(crx_id: &[u8]) -> Vec<u8> {
    message::SignedData { crx_id: Some(crx_id.to_vec()) }.encode_to_vec()
}

/// Assemble the CRX3 file header around one RSA proof.
pub fn build_file_header(proof: &AsymmetricKeyProof, signed_header_data: Vec<u8>) -> message::CrxFileHeader {
    message::CrxFileHeader {
        sha256_with_rsa: vec![proof.into()],
        sha256_with_ecdsa: Vec::new(),
        signed_header_data: Some(signed_header_data),
    }
}
