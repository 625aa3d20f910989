//! types.rs
//! Crate-wide error covering parsing, signing, packing and I/O.
//!
//! Each layer keeps its own error enum; `CrxError` lets callers that mix parse
//! and pack calls use `?` across both.

use std::io;

use thiserror::Error;

use crate::crypto::SignError;
use crate::packer::PackError;
use crate::parser::ParseError;

#[derive(Debug, Error)]
pub enum CrxError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("sign error: {0}")]
    Sign(#[from] SignError),

    #[error("pack error: {0}")]
    Pack(#[from] PackError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CrxError {
    /// True when the input ended before the container header did.
    pub fn is_eof(&self) -> bool {
        match self {
            CrxError::Parse(e) => e.is_eof(),
            CrxError::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ContainerVersion;

    fn parse_fails() -> Result<ContainerVersion, CrxError> {
        Ok(ContainerVersion::from_raw(9)?)
    }

    #[test]
    fn question_mark_lifts_layer_errors() {
        let err = parse_fails().unwrap_err();
        assert!(matches!(err, CrxError::Parse(ParseError::UnsupportedVersion { raw: 9 })));
        assert_eq!(err.to_string(), "parse error: unsupported version: 0x9");
        assert!(!err.is_eof());
    }

    #[test]
    fn eof_is_reported_through_parse() {
        let err = CrxError::from(ParseError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
        assert!(err.is_eof());
    }
}
