// ## 📂 File: `src/packer/types.rs`

//! packer/types.rs
//! Pack options and pack-time errors.

use std::fmt;
use std::io;

use rsa::rand_core::CryptoRngCore;
use thiserror::Error;

use crate::crypto::SignError;

/// Per-call packing options.
#[derive(Default)]
pub struct PackOptions<'a> {
    /// Randomness handed to the signer. PKCS#1 v1.5 output does not depend on it.
    pub rng: Option<&'a mut dyn CryptoRngCore>,
}

impl<'a> PackOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rng(rng: &'a mut dyn CryptoRngCore) -> Self {
        Self { rng: Some(rng) }
    }
}

impl fmt::Debug for PackOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackOptions")
            .field("rng", &self.rng.is_some())
            .finish()
    }
}

/// Pack failures. Nothing has been written to the destination unless the
/// error is `Io`.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("signing failed: {0}")]
    Sign(#[from] SignError),

    #[error("{field} length {have} is outside the sane range 1..={max}")]
    InsaneLength { field: &'static str, have: usize, max: u32 },

    #[error("public key encoding failed: {0}")]
    KeyEncoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
