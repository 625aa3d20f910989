//! parser/v3.rs
//! CRX3 header region: a length prefix, then a protobuf `CrxFileHeader`.
//!
//! Only the first `sha256_with_rsa` proof feeds the identifier; ECDSA proofs are
//! kept in the header untouched.

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::constants::{segment_labels, MAX_SANE_HEADER_LEN};
use crate::headers::{decode_file_header, FileHeader};
use crate::inventory::CountingReader;
use crate::parser::types::ParseError;
use crate::parser::{read_exact_vec, sane_length};

#[derive(Copy, Clone, Debug, Default)]
pub struct Crx3Interpreter;

impl Crx3Interpreter {
    pub fn interpret<R: Read>(&self, reader: &mut CountingReader<R>) -> Result<FileHeader, ParseError> {
        let raw = reader.segment(segment_labels::FILE_HEADER_LENGTH).read_u32::<LittleEndian>()?;
        let header_len = sane_length("file header", raw, MAX_SANE_HEADER_LEN)?;
        debug!(header_len, "crx3 header length");

        let bytes = read_exact_vec(&mut reader.segment(segment_labels::FILE_HEADER), header_len)?;
        Ok(decode_file_header(&bytes)?.into())
    }
}
