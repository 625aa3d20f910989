//! crypto/signer.rs
//! Detached signatures over byte buffers.
//!
//! Design notes:
//! - A signer is a (hash function, asymmetric algorithm) pair, e.g. SHA256withRSA.
//! - RSASSA-PKCS1-v1_5 is deterministic; an injected rng only drives blinding,
//!   so the signature bytes are identical with or without one.
//! - Unknown combinations fail with `UnsupportedAlgorithm` before touching the key.

use rsa::rand_core::CryptoRngCore;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::Sha1;
use sha2::{Digest as _, Sha256};
use tracing::trace;

use crate::crypto::types::{CryptoAlgorithm, HashFunction, SignError};

/// Produces a detached signature over `input`.
pub trait Signer {
    fn sign(
        &self,
        input: &[u8],
        private_key: &RsaPrivateKey,
        rng: Option<&mut dyn CryptoRngCore>,
    ) -> Result<Vec<u8>, SignError>;
}

/// Signer selected by hash function and asymmetric algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BasicSigner {
    hash: HashFunction,
    crypto: CryptoAlgorithm,
}

impl BasicSigner {
    pub const fn new(hash: HashFunction, crypto: CryptoAlgorithm) -> Self {
        Self { hash, crypto }
    }

    /// SHA1withRSA, used for CRX2 payload signatures.
    pub const fn sha1_with_rsa() -> Self {
        Self::new(HashFunction::Sha1, CryptoAlgorithm::Rsa)
    }

    /// SHA256withRSA, used for CRX3 signed data.
    pub const fn sha256_with_rsa() -> Self {
        Self::new(HashFunction::Sha256, CryptoAlgorithm::Rsa)
    }

    pub fn hash_function(&self) -> HashFunction {
        self.hash
    }

    pub fn crypto_algorithm(&self) -> CryptoAlgorithm {
        self.crypto
    }

    /// Conventional algorithm name, e.g. `SHA256withRSA`.
    pub fn signature_algorithm(&self) -> String {
        format!("{}with{}", self.hash, self.crypto)
    }

    /// PKCS#1 v1.5 scheme plus the hashed input it signs.
    fn scheme_and_digest(&self, input: &[u8]) -> (Pkcs1v15Sign, Vec<u8>) {
        match self.hash {
            HashFunction::Sha1 => (Pkcs1v15Sign::new::<Sha1>(), Sha1::digest(input).to_vec()),
            HashFunction::Sha256 => (Pkcs1v15Sign::new::<Sha256>(), Sha256::digest(input).to_vec()),
        }
    }
}

impl Signer for BasicSigner {
    fn sign(
        &self,
        input: &[u8],
        private_key: &RsaPrivateKey,
        rng: Option<&mut dyn CryptoRngCore>,
    ) -> Result<Vec<u8>, SignError> {
        if self.crypto != CryptoAlgorithm::Rsa {
            return Err(SignError::UnsupportedAlgorithm { hash: self.hash, crypto: self.crypto });
        }

        let (scheme, digest) = self.scheme_and_digest(input);
        let signature = match rng {
            Some(mut rng) => private_key.sign_with_rng(&mut rng, scheme, &digest)?,
            None => private_key.sign(scheme, &digest)?,
        };

        trace!(
            algorithm = %self.signature_algorithm(),
            input_len = input.len(),
            signature_len = signature.len(),
            "signed input"
        );
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names() {
        assert_eq!(BasicSigner::sha1_with_rsa().signature_algorithm(), "SHA1withRSA");
        assert_eq!(BasicSigner::sha256_with_rsa().signature_algorithm(), "SHA256withRSA");
        assert_eq!(
            BasicSigner::new(HashFunction::Sha256, CryptoAlgorithm::Ecdsa).signature_algorithm(),
            "SHA256withECDSA"
        );
    }
}
