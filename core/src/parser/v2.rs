//! parser/v2.rs
//! CRX2 header region: two length fields, then the key and signature bytes.
//!
//! ```text
//! pubKeyLen(4 LE) | sigLen(4 LE) | pubKey | signature
//! ```

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::constants::{segment_labels, MAX_SANE_PUBKEY_LEN, MAX_SANE_SIGNATURE_LEN};
use crate::headers::{AsymmetricKeyProof, FileHeader, MapHeader};
use crate::inventory::CountingReader;
use crate::parser::types::ParseError;
use crate::parser::{read_exact_vec, sane_length};

#[derive(Copy, Clone, Debug, Default)]
pub struct Crx2Interpreter;

impl Crx2Interpreter {
    /// Read the header region following the version field.
    pub fn interpret<R: Read>(&self, reader: &mut CountingReader<R>) -> Result<FileHeader, ParseError> {
        let raw = reader.segment(segment_labels::PUBLIC_KEY_LENGTH).read_u32::<LittleEndian>()?;
        let key_len = sane_length("public key", raw, MAX_SANE_PUBKEY_LEN)?;

        let raw = reader.segment(segment_labels::SIGNATURE_LENGTH).read_u32::<LittleEndian>()?;
        let sig_len = sane_length("signature", raw, MAX_SANE_SIGNATURE_LEN)?;

        debug!(key_len, sig_len, "crx2 header lengths");

        let public_key = read_exact_vec(&mut reader.segment(segment_labels::PUBLIC_KEY), key_len)?;
        let signature = read_exact_vec(&mut reader.segment(segment_labels::SIGNATURE), sig_len)?;

        Ok(MapHeader::single_rsa(AsymmetricKeyProof::new(public_key, signature)).into())
    }
}
