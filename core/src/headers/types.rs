//! headers/types.rs
//! Proof value types and the proof algorithm registry.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::constants::algorithm_keys;
use crate::crypto::{CryptoAlgorithm, HashFunction};
use crate::headers::message;

/// Proof algorithms a CRX3 file header can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProofAlgorithm {
    Sha256WithRsa,
    Sha256WithEcdsa,
}

impl ProofAlgorithm {
    /// Registry order; also the order of `FileHeader::all_proofs`.
    pub const ALL: [ProofAlgorithm; 2] = [ProofAlgorithm::Sha256WithRsa, ProofAlgorithm::Sha256WithEcdsa];

    pub fn all() -> impl Iterator<Item = ProofAlgorithm> {
        Self::ALL.into_iter()
    }

    /// Key under which the file header stores proofs of this algorithm.
    pub const fn file_header_key(self) -> &'static str {
        match self {
            ProofAlgorithm::Sha256WithRsa   => algorithm_keys::SHA256_WITH_RSA,
            ProofAlgorithm::Sha256WithEcdsa => algorithm_keys::SHA256_WITH_ECDSA,
        }
    }

    pub fn from_file_header_key(key: &str) -> Option<Self> {
        Self::all().find(|alg| alg.file_header_key() == key)
    }

    pub const fn hash_function(self) -> HashFunction {
        HashFunction::Sha256
    }

    pub const fn crypto_algorithm(self) -> CryptoAlgorithm {
        match self {
            ProofAlgorithm::Sha256WithRsa   => CryptoAlgorithm::Rsa,
            ProofAlgorithm::Sha256WithEcdsa => CryptoAlgorithm::Ecdsa,
        }
    }
}

impl fmt::Display for ProofAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_header_key())
    }
}

/// A public key and the signature made with its private half.
///
/// Held as raw bytes; base64 views are provided for display and interchange.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AsymmetricKeyProof {
    public_key: Vec<u8>,
    signature: Vec<u8>,
}

impl AsymmetricKeyProof {
    pub fn new(public_key: impl Into<Vec<u8>>, signature: impl Into<Vec<u8>>) -> Self {
        Self { public_key: public_key.into(), signature: signature.into() }
    }

    /// Build from standard (padded) base64 text.
    pub fn from_base64(public_key: &str, signature: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self::new(STANDARD.decode(public_key)?, STANDARD.decode(signature)?))
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(&self.public_key)
    }

    pub fn signature_base64(&self) -> String {
        STANDARD.encode(&self.signature)
    }

    pub fn public_key_len(&self) -> usize {
        self.public_key.len()
    }

    pub fn signature_len(&self) -> usize {
        self.signature.len()
    }

    pub fn combined_len(&self) -> usize {
        self.public_key_len() + self.signature_len()
    }
}

impl fmt::Debug for AsymmetricKeyProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsymmetricKeyProof")
            .field("public_key_len", &self.public_key_len())
            .field("signature_len", &self.signature_len())
            .finish()
    }
}

// Absent optional fields read as empty, matching proto2 defaults.
impl From<&message::AsymmetricKeyProof> for AsymmetricKeyProof {
    fn from(wire: &message::AsymmetricKeyProof) -> Self {
        Self::new(
            wire.public_key.clone().unwrap_or_default(),
            wire.signature.clone().unwrap_or_default(),
        )
    }
}

impl From<&AsymmetricKeyProof> for message::AsymmetricKeyProof {
    fn from(proof: &AsymmetricKeyProof) -> Self {
        Self {
            public_key: Some(proof.public_key.clone()),
            signature: Some(proof.signature.clone()),
        }
    }
}

/// A proof tagged with the algorithm it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofContainer {
    pub algorithm: ProofAlgorithm,
    pub proof: AsymmetricKeyProof,
}
