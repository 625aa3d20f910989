//! headers/mod.rs
//! File header model shared by the parser and the packers.
//!
//! Notes:
//! - CRX2 headers are two length-prefixed byte fields, modelled as a `MapHeader`.
//! - CRX3 headers are a protobuf `CrxFileHeader`, modelled as a `MessageHeader`.
//! - Wire field numbers live in `message.rs` and must never change.

pub mod types;
pub mod message;
pub mod file_header;
pub mod encode;
pub mod decode;

pub use types::*;
pub use file_header::*;
pub use encode::*;
pub use decode::*;
