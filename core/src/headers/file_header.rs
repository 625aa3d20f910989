//! headers/file_header.rs
//! File header model: proofs grouped by algorithm key.
//!
//! Design notes:
//! - `MapHeader` backs CRX2 (one implicit `sha256_with_rsa` proof).
//! - `MessageHeader` backs CRX3 and wraps the decoded wire message; proofs are
//!   converted on access, never cached.
//! - The two share the `CrxFileHeader` contract and no implementation.

use std::collections::BTreeMap;
use std::fmt;

use prost::Message;

use crate::constants::algorithm_keys;
use crate::headers::message;
use crate::headers::types::{AsymmetricKeyProof, ProofAlgorithm, ProofContainer};

/// Contract shared by every header variant.
pub trait CrxFileHeader {
    /// Proofs stored under `algorithm_key`, in file order. Empty when none.
    fn proofs_for(&self, algorithm_key: &str) -> Vec<AsymmetricKeyProof>;

    /// Number of bytes the header occupies after its length prefix.
    fn encoded_len(&self) -> usize;

    fn proofs(&self, algorithm: ProofAlgorithm) -> Vec<AsymmetricKeyProof> {
        self.proofs_for(algorithm.file_header_key())
    }

    /// Every proof, tagged with its algorithm, in registry order then file order.
    fn all_proofs(&self) -> Vec<ProofContainer> {
        ProofAlgorithm::all()
            .flat_map(|algorithm| {
                self.proofs(algorithm)
                    .into_iter()
                    .map(move |proof| ProofContainer { algorithm, proof })
            })
            .collect()
    }
}

/// In-memory multimap header used by CRX2.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapHeader {
    proofs: BTreeMap<String, Vec<AsymmetricKeyProof>>,
}

impl MapHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header holding a single `sha256_with_rsa` proof, the CRX2 shape.
    pub fn single_rsa(proof: AsymmetricKeyProof) -> Self {
        let mut header = Self::new();
        header.insert(algorithm_keys::SHA256_WITH_RSA, proof);
        header
    }

    pub fn insert(&mut self, algorithm_key: impl Into<String>, proof: AsymmetricKeyProof) {
        self.proofs.entry(algorithm_key.into()).or_default().push(proof);
    }

    pub fn algorithm_keys(&self) -> impl Iterator<Item = &str> {
        self.proofs.keys().map(String::as_str)
    }
}

impl CrxFileHeader for MapHeader {
    fn proofs_for(&self, algorithm_key: &str) -> Vec<AsymmetricKeyProof> {
        self.proofs.get(algorithm_key).cloned().unwrap_or_default()
    }

    fn encoded_len(&self) -> usize {
        self.proofs.values().flatten().map(AsymmetricKeyProof::combined_len).sum()
    }
}

impl FromIterator<(String, AsymmetricKeyProof)> for MapHeader {
    fn from_iter<I: IntoIterator<Item = (String, AsymmetricKeyProof)>>(iter: I) -> Self {
        let mut header = Self::new();
        for (key, proof) in iter {
            header.insert(key, proof);
        }
        header
    }
}

/// Header backed by a decoded CRX3 `CrxFileHeader` message.
///
/// The on-disk size is kept separately: decoding drops unknown fields, so
/// re-encoding the message can come out shorter than the bytes it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageHeader {
    message: message::CrxFileHeader,
    encoded_len: usize,
}

impl MessageHeader {
    /// Header for a freshly built message; its size is its encoding.
    pub fn new(message: message::CrxFileHeader) -> Self {
        let encoded_len = message.encoded_len();
        Self { message, encoded_len }
    }

    /// Header decoded from (or written as) exactly `encoded_len` bytes.
    pub fn with_encoded_len(message: message::CrxFileHeader, encoded_len: usize) -> Self {
        Self { message, encoded_len }
    }

    pub fn message(&self) -> &message::CrxFileHeader {
        &self.message
    }

    /// Raw `signed_header_data` bytes, the portion covered by the signature.
    pub fn signed_header_data(&self) -> Option<&[u8]> {
        self.message.signed_header_data.as_deref()
    }

    /// The crx id carried inside `signed_header_data`, if any.
    pub fn crx_id(&self) -> Result<Option<Vec<u8>>, prost::DecodeError> {
        match self.signed_header_data() {
            Some(bytes) => Ok(message::SignedData::decode(bytes)?.crx_id),
            None => Ok(None),
        }
    }

    fn wire_proofs(&self, algorithm_key: &str) -> &[message::AsymmetricKeyProof] {
        match ProofAlgorithm::from_file_header_key(algorithm_key) {
            Some(ProofAlgorithm::Sha256WithRsa) => &self.message.sha256_with_rsa,
            Some(ProofAlgorithm::Sha256WithEcdsa) => &self.message.sha256_with_ecdsa,
            None => &[],
        }
    }
}

impl CrxFileHeader for MessageHeader {
    fn proofs_for(&self, algorithm_key: &str) -> Vec<AsymmetricKeyProof> {
        self.wire_proofs(algorithm_key).iter().map(AsymmetricKeyProof::from).collect()
    }

    fn encoded_len(&self) -> usize {
        self.encoded_len
    }
}

/// Header of either container version.
#[derive(Debug, Clone, PartialEq)]
pub enum FileHeader {
    Map(MapHeader),
    Message(MessageHeader),
}

impl FileHeader {
    pub fn as_message(&self) -> Option<&MessageHeader> {
        match self {
            FileHeader::Message(h) => Some(h),
            FileHeader::Map(_) => None,
        }
    }
}

impl CrxFileHeader for FileHeader {
    fn proofs_for(&self, algorithm_key: &str) -> Vec<AsymmetricKeyProof> {
        match self {
            FileHeader::Map(h) => h.proofs_for(algorithm_key),
            FileHeader::Message(h) => h.proofs_for(algorithm_key),
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            FileHeader::Map(h) => h.encoded_len(),
            FileHeader::Message(h) => h.encoded_len(),
        }
    }
}

impl From<MapHeader> for FileHeader {
    fn from(h: MapHeader) -> Self {
        FileHeader::Map(h)
    }
}

impl From<MessageHeader> for FileHeader {
    fn from(h: MessageHeader) -> Self {
        FileHeader::Message(h)
    }
}

impl fmt::Display for FileHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileHeader::Map(h) => {
                let keys: Vec<&str> = h.algorithm_keys().collect();
                write!(f, "MapHeader{{proofs={:?}}}", keys)
            }
            FileHeader::Message(h) => {
                f.write_str("CrxFileHeader{")?;
                for (i, alg) in ProofAlgorithm::all().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}.count={}", alg, h.wire_proofs(alg.file_header_key()).len())?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proof(tag: u8) -> AsymmetricKeyProof {
        AsymmetricKeyProof::new(vec![tag; 4], vec![tag; 8])
    }

    #[test]
    fn map_header_is_a_multimap() {
        let header: MapHeader = vec![
            ("sha256_with_rsa".to_string(), proof(1)),
            ("sha256_with_rsa".to_string(), proof(2)),
            ("sha256_with_ecdsa".to_string(), proof(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(header.proofs(ProofAlgorithm::Sha256WithRsa), vec![proof(1), proof(2)]);
        assert_eq!(header.proofs(ProofAlgorithm::Sha256WithEcdsa), vec![proof(3)]);
        assert!(header.proofs_for("unknown").is_empty());
        assert_eq!(header.encoded_len(), 3 * 12);
    }

    #[test]
    fn message_header_converts_each_list() {
        let wire = message::CrxFileHeader {
            sha256_with_rsa: vec![(&proof(1)).into()],
            sha256_with_ecdsa: vec![(&proof(2)).into(), (&proof(3)).into()],
            signed_header_data: None,
        };
        let header = MessageHeader::new(wire.clone());

        assert_eq!(header.proofs(ProofAlgorithm::Sha256WithRsa), vec![proof(1)]);
        assert_eq!(header.proofs(ProofAlgorithm::Sha256WithEcdsa), vec![proof(2), proof(3)]);
        assert!(header.proofs_for("sha1_with_rsa").is_empty());
        assert_eq!(header.encoded_len(), wire.encoded_len());
        assert_eq!(header.crx_id().unwrap(), None);
    }

    #[test]
    fn all_proofs_in_registry_order() {
        let wire = message::CrxFileHeader {
            sha256_with_rsa: vec![(&proof(1)).into()],
            sha256_with_ecdsa: vec![(&proof(2)).into()],
            signed_header_data: None,
        };
        let all = FileHeader::from(MessageHeader::new(wire)).all_proofs();
        let algs: Vec<_> = all.iter().map(|c| c.algorithm).collect();
        assert_eq!(algs, vec![ProofAlgorithm::Sha256WithRsa, ProofAlgorithm::Sha256WithEcdsa]);
        assert_eq!(all[1].proof, proof(2));
    }

    #[test]
    fn display_summaries() {
        let map = FileHeader::from(MapHeader::single_rsa(proof(1)));
        assert_eq!(map.to_string(), "MapHeader{proofs=[\"sha256_with_rsa\"]}");

        let msg = FileHeader::from(MessageHeader::new(message::CrxFileHeader::default()));
        assert_eq!(
            msg.to_string(),
            "CrxFileHeader{sha256_with_rsa.count=0, sha256_with_ecdsa.count=0}"
        );
    }
}
