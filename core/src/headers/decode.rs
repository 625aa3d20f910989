//! headers/decode.rs
//! Decoding CRX3 header bytes.
//!
//! The caller has already bounds-checked the declared length and read exactly
//! that many bytes; this only interprets them.

use prost::Message;

use crate::headers::file_header::MessageHeader;
use crate::headers::message;

/// Decode `CrxFileHeader` bytes into a `MessageHeader`.
///
/// The header reports `bytes.len()` as its size, unknown fields included.
pub fn decode_file_header(bytes: &[u8]) -> Result<MessageHeader, prost::DecodeError> {
    let message = message::CrxFileHeader::decode(bytes)?;
    Ok(MessageHeader::with_encoded_len(message, bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::encode::{build_file_header, encode_signed_data};
    use crate::headers::types::{AsymmetricKeyProof, ProofAlgorithm};
    use crate::headers::file_header::CrxFileHeader;

    #[test]
    fn decodes_what_encode_builds() {
        let proof = AsymmetricKeyProof::new(vec![7u8; 10], vec![9u8; 20]);
        let shd = encode_signed_data(&[0x11; 16]);
        let bytes = build_file_header(&proof, shd.clone()).encode_to_vec();

        let header = decode_file_header(&bytes).unwrap();
        assert_eq!(header.proofs(ProofAlgorithm::Sha256WithRsa), vec![proof]);
        assert_eq!(header.signed_header_data(), Some(&shd[..]));
        assert_eq!(header.crx_id().unwrap(), Some(vec![0x11; 16]));
        assert_eq!(header.encoded_len(), bytes.len());
    }

    #[test]
    fn unknown_fields_count_toward_size() {
        let proof = AsymmetricKeyProof::new(vec![7u8; 2], vec![9u8; 2]);
        let mut bytes = build_file_header(&proof, Vec::new()).encode_to_vec();
        let known = bytes.len();
        // Field 4, length-delimited, 3 bytes: not part of the schema.
        bytes.extend_from_slice(&[0x22, 0x03, 0x01, 0x02, 0x03]);

        let header = decode_file_header(&bytes).unwrap();
        assert_eq!(header.encoded_len(), known + 5);
        assert_eq!(header.message().encoded_len(), known);
        assert_eq!(header.proofs(ProofAlgorithm::Sha256WithRsa), vec![proof]);
    }

    #[test]
    fn rejects_truncated_message() {
        // Field 2, length-delimited, declares 5 bytes but carries 1.
        assert!(decode_file_header(&[0x12, 0x05, 0x0a]).is_err());
    }
}
