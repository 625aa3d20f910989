//! headers/message.rs
//! CRX3 header wire messages (protobuf, proto2 field presence).
//!
//! Field numbers must match Chromium's `crx3.proto`; independent verifiers
//! decode these bytes, so they are not ours to renumber.
//!
//! ```text
//! CrxFileHeader {
//!   repeated AsymmetricKeyProof sha256_with_rsa    = 2;
//!   repeated AsymmetricKeyProof sha256_with_ecdsa  = 3;
//!   optional bytes              signed_header_data = 10000;
//! }
//! AsymmetricKeyProof { optional bytes public_key = 1; optional bytes signature = 2; }
//! SignedData         { optional bytes crx_id = 1; }
//! ```

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct CrxFileHeader {
    #[prost(message, repeated, tag = "2")]
    pub sha256_with_rsa: Vec<AsymmetricKeyProof>,
    #[prost(message, repeated, tag = "3")]
    pub sha256_with_ecdsa: Vec<AsymmetricKeyProof>,
    #[prost(bytes = "vec", optional, tag = "10000")]
    pub signed_header_data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AsymmetricKeyProof {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub public_key: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub signature: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SignedData {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub crx_id: Option<Vec<u8>>,
}
