//! crypto/keys.rs
//! Caller-supplied RSA key pair.
//!
//! Loading key text (PEM) and generating keys stay with the caller; this type
//! only exposes the encoded forms the container needs.

use std::fmt;

use rsa::pkcs8::EncodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::crypto::digest::derive_id;
use crate::crypto::types::SignError;

/// An RSA private key and its public half.
#[derive(Clone)]
pub struct KeyPair {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
}

impl KeyPair {
    pub fn new(private_key: RsaPrivateKey) -> Self {
        let public_key = private_key.to_public_key();
        Self { private_key, public_key }
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// Public key as X.509 SubjectPublicKeyInfo DER, the form written into containers.
    pub fn public_key_der(&self) -> Result<Vec<u8>, SignError> {
        self.public_key
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| SignError::InvalidKey(format!("public key not encodable: {}", e)))
    }

    /// Identifier derived from the encoded public key.
    pub fn id(&self) -> Result<String, SignError> {
        Ok(derive_id(&self.public_key_der()?))
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.public_key.size() * 8
    }
}

impl From<RsaPrivateKey> for KeyPair {
    fn from(private_key: RsaPrivateKey) -> Self {
        Self::new(private_key)
    }
}

// Private material stays out of logs.
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}
