//! packer/v2.rs
//! CRX2 writer.
//!
//! ```text
//! "Cr24" | 2 | pubKeyLen | sigLen | pubKey | SHA1withRSA(payload) | payload
//! ```
//!
//! Lengths are checked against the parser's maxima so every written file re-parses.

use std::io::Write;

use tracing::{debug, warn};

use crate::constants::{version_ids, MAGIC_CR24, MAX_SANE_PUBKEY_LEN, MAX_SANE_SIGNATURE_LEN, V2_FIXED_HEADER_LEN};
use crate::crypto::{derive_id, BasicSigner, KeyPair, Signer};
use crate::headers::{AsymmetricKeyProof, MapHeader};
use crate::packer::types::{PackError, PackOptions};
use crate::packer::{encoded_public_key, sane_length};
use crate::parser::{ContainerVersion, Metadata};
use crate::source::InputSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crx2Packer {
    signer: BasicSigner,
}

impl Default for Crx2Packer {
    fn default() -> Self {
        Self { signer: BasicSigner::sha1_with_rsa() }
    }
}

impl Crx2Packer {
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
        let key_len = sane_length("public key", public_key.len(), MAX_SANE_PUBKEY_LEN)?;

        let data = payload.read()?;
        let signature = self.signer.sign(&data, key_pair.private_key(), options.rng)?;
        let sig_len = sane_length("signature", signature.len(), MAX_SANE_SIGNATURE_LEN).map_err(|e| {
            warn!(sig_len = signature.len(), max = MAX_SANE_SIGNATURE_LEN, "signature exceeds crx2 cap");
            e
        })?;

        let mut header = Vec::with_capacity(V2_FIXED_HEADER_LEN + public_key.len() + signature.len());
        header.extend_from_slice(&MAGIC_CR24);
        header.extend_from_slice(&version_ids::CRX2.to_le_bytes());
        header.extend_from_slice(&key_len.to_le_bytes());
        header.extend_from_slice(&sig_len.to_le_bytes());
        header.extend_from_slice(&public_key);
        header.extend_from_slice(&signature);
        debug!(header_len = header.len(), payload_len = data.len(), "writing crx2 container");

        output.write_all(&header)?;
        output.write_all(&data)?;
        output.flush()?;

        let id = derive_id(&public_key);
        let proof = AsymmetricKeyProof::new(public_key, signature);
        Ok(Metadata::from_parts(ContainerVersion::Crx2, MapHeader::single_rsa(proof).into(), id))
    }
}
