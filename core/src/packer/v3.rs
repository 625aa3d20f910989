//! packer/v3.rs
//! CRX3 writer.
//!
//! Signing input, byte for byte:
//!
//! ```text
//! "CRX3 SignedData\0" | LE32(len(shd)) | shd | payload
//! ```
//!
//! where `shd` is the encoded `SignedData { crx_id }`. The outer `CrxFileHeader`
//! framing is not signed; verifiers rebuild this input from the decoded
//! `signed_header_data` field.

use std::io::Write;

use prost::Message;
use tracing::debug;

use crate::constants::{version_ids, MAGIC_CR24, MAX_SANE_HEADER_LEN, PREAMBLE_LEN, SIGNED_DATA_PREFIX};
use crate::crypto::{derive_crx_id, derive_id, BasicSigner, KeyPair, Signer};
use crate::headers::{build_file_header, encode_signed_data, AsymmetricKeyProof, MessageHeader};
use crate::packer::types::{PackError, PackOptions};
use crate::packer::{encoded_public_key, sane_length};
use crate::parser::{ContainerVersion, Metadata};
use crate::source::InputSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crx3Packer {
    signer: BasicSigner,
}

impl Default for Crx3Packer {
    fn default() -> Self {
        Self { signer: BasicSigner::sha256_with_rsa() }
    }
}

impl Crx3Packer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pack<S, W>(
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
        let public_key = encoded_public_key(key_pair)?;
        let signed_header_data = encode_signed_data(&derive_crx_id(&public_key));

        let data = payload.read()?;
        let input = signing_input(&signed_header_data, &data)?;
        let signature = self.signer.sign(&input, key_pair.private_key(), options.rng)?;
        debug!(sig_len = signature.len(), "signed crx3 data");

        let id = derive_id(&public_key);
        let proof = AsymmetricKeyProof::new(public_key, signature);
        let file_header = build_file_header(&proof, signed_header_data);
        let encoded = file_header.encode_to_vec();
        let header_len = sane_length("file header", encoded.len(), MAX_SANE_HEADER_LEN)?;

        let mut header = Vec::with_capacity(PREAMBLE_LEN + 4 + encoded.len());
        header.extend_from_slice(&MAGIC_CR24);
        header.extend_from_slice(&version_ids::CRX3.to_le_bytes());
        header.extend_from_slice(&header_len.to_le_bytes());
        header.extend_from_slice(&encoded);
        debug!(header_len, payload_len = data.len(), "writing crx3 container");

        output.write_all(&header)?;
        output.write_all(&data)?;
        output.flush()?;

        Ok(Metadata::from_parts(ContainerVersion::Crx3, MessageHeader::with_encoded_len(file_header, encoded.len()).into(), id))
    }
}

/// Bytes the CRX3 signature covers.
pub fn signing_input(signed_header_data: &[u8], payload: &[u8]) -> Result<Vec<u8>, PackError> {
    let shd_len = u32::try_from(signed_header_data.len()).map_err(|_| PackError::InsaneLength {
        field: "signed header data",
        have: signed_header_data.len(),
        max: u32::MAX,
    })?;
    let mut input = Vec::with_capacity(SIGNED_DATA_PREFIX.len() + 4 + signed_header_data.len() + payload.len());
    input.extend_from_slice(SIGNED_DATA_PREFIX);
    input.extend_from_slice(&shd_len.to_le_bytes());
    input.extend_from_slice(signed_header_data);
    input.extend_from_slice(payload);
    Ok(input)
}
