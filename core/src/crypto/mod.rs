//! crypto/mod.rs
//! Identifier derivation, key pairs and detached signatures.

pub mod types;
pub mod digest;
pub mod keys;
pub mod signer;

pub use types::*;
pub use digest::*;
pub use keys::*;
pub use signer::*;
