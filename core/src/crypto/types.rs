
// ## 📂 File: `src/crypto/types.rs`

use std::fmt;
use thiserror::Error;

/// Hash functions a signer can pair with an asymmetric algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// CRX2 payload signatures.
    Sha1,
    /// CRX3 signed data and identifier derivation.
    Sha256,
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashFunction::Sha1   => "SHA1",
            HashFunction::Sha256 => "SHA256",
        };
        f.write_str(name)
    }
}

/// Asymmetric algorithms named by the container format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CryptoAlgorithm {
    Rsa,
    /// Recognized in CRX3 headers; no signing support.
    Ecdsa,
}

impl fmt::Display for CryptoAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CryptoAlgorithm::Rsa   => "RSA",
            CryptoAlgorithm::Ecdsa => "ECDSA",
        };
        f.write_str(name)
    }
}

/// Signing-time failures.
#[derive(Debug, Error)]
pub enum SignError {
    /// The hash/crypto combination has no implementation.
    #[error("unsupported signature algorithm: {hash}with{crypto}")]
    UnsupportedAlgorithm { hash: HashFunction, crypto: CryptoAlgorithm },

    /// The key cannot be used with the algorithm (too small, malformed, not encodable).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Any other signing-engine error.
    #[error("signature failure: {0}")]
    SignatureFailure(String),
}

impl From<rsa::Error> for SignError {
    fn from(e: rsa::Error) -> Self {
        match e {
            rsa::Error::MessageTooLong
            | rsa::Error::InvalidModulus
            | rsa::Error::InvalidExponent
            | rsa::Error::InvalidPrime => SignError::InvalidKey(e.to_string()),
            other => SignError::SignatureFailure(other.to_string()),
        }
    }
}
