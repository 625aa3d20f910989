
/// Magic number at offset 0 of every container file.
/// "Cr24" = Chrome extension package
// Protocol magic is a `[u8; 4]` so the type itself enforces exactly 4 bytes.
pub const MAGIC_CR24: [u8; 4] = *b"Cr24";

/// Container format identifiers (little-endian u32 on the wire).
pub mod version_ids {
    pub const CRX2: u32 = 2;
    pub const CRX3: u32 = 3;
}

/// Sane upper bounds for length-prefixed fields.
///
/// A declared length of zero or above the bound is rejected before any buffer
/// is allocated for it.
pub const MAX_SANE_PUBKEY_LEN: u32 = 1024 * 32;        // 32 KiB
pub const MAX_SANE_SIGNATURE_LEN: u32 = 1024 * 64;     // 64 KiB
pub const MAX_SANE_HEADER_LEN: u32 = 1024 * 128;       // 128 KiB

/// Size of the fixed prefix shared by both versions: magic + version.
pub const PREAMBLE_LEN: usize = 4 + 4;

/// V2 header prefix: magic + version + pubkey length + signature length.
pub const V2_FIXED_HEADER_LEN: usize = PREAMBLE_LEN + 4 + 4;

/// Identifier length in characters.
pub const ID_LEN: usize = 32;

/// Length of the binary crx id carried in CRX3 signed header data.
pub const CRX_ID_LEN: usize = 16;

/// Hex digits of a lowercase digest and their identifier substitutes,
/// position for position.
pub const DIGEST_CHARS: &[u8; 16] = b"0123456789abcdef";
pub const CRX_ID_CHARS: &[u8; 16] = b"abcdefghijklmnop";

/// Domain separator that opens the CRX3 signing input (NUL included).
pub const SIGNED_DATA_PREFIX: &[u8] = b"CRX3 SignedData\x00";

/// File header keys for proof algorithms.
pub mod algorithm_keys {
    pub const SHA256_WITH_RSA: &str = "sha256_with_rsa";
    pub const SHA256_WITH_ECDSA: &str = "sha256_with_ecdsa";
}

/// Stream segment labels recorded by the parse inventory.
pub mod segment_labels {
    pub const MAGIC_NUMBER: &str = "magicNumber";
    pub const VERSION: &str = "version";
    pub const PUBLIC_KEY_LENGTH: &str = "publicKeyLength";
    pub const SIGNATURE_LENGTH: &str = "signatureLength";
    pub const PUBLIC_KEY: &str = "publicKey";
    pub const SIGNATURE: &str = "signature";
    pub const FILE_HEADER_LENGTH: &str = "fileHeaderLength";
    pub const FILE_HEADER: &str = "fileHeader";
}
