// Identifier derivation: known answers and properties.

mod common;

#[cfg(test)]
mod tests {
    use crx_core::constants::ID_LEN;
    use crx_core::crypto::{derive_crx_id, derive_id};
    use proptest::prelude::*;
    use sha2::{Digest, Sha256};

    use super::common::{test_key_pair, TEST_KEY_CRX_ID_HEX, TEST_KEY_DER_LEN, TEST_KEY_ID};

    #[test]
    fn test_key_identifier() {
        let pair = test_key_pair();
        let der = pair.public_key_der().unwrap();
        assert_eq!(der.len(), TEST_KEY_DER_LEN);
        assert_eq!(derive_id(&der), TEST_KEY_ID);
        assert_eq!(pair.id().unwrap(), TEST_KEY_ID);
        assert_eq!(pair.bits(), 1024);
    }

    #[test]
    fn test_key_crx_id() {
        let der = test_key_pair().public_key_der().unwrap();
        assert_eq!(hex::encode(derive_crx_id(&der)), TEST_KEY_CRX_ID_HEX);
    }

    #[test]
    fn key_pair_debug_hides_private_material() {
        let shown = format!("{:?}", test_key_pair());
        assert!(shown.starts_with("KeyPair { bits: 1024"), "{shown}");
    }

    proptest! {
        #[test]
        fn identifier_shape(key in proptest::collection::vec(any::<u8>(), 0..512)) {
            let id = derive_id(&key);
            prop_assert_eq!(id.len(), ID_LEN);
            prop_assert!(id.bytes().all(|c| (b'a'..=b'p').contains(&c)));
            prop_assert_eq!(derive_id(&key), id);
        }

        #[test]
        fn identifier_is_shifted_digest_prefix(key in proptest::collection::vec(any::<u8>(), 0..256)) {
            let digest = hex::encode(Sha256::digest(&key));
            let shifted: String = digest[..ID_LEN]
                .chars()
                .map(|c| (b'a' + c.to_digit(16).unwrap() as u8) as char)
                .collect();
            prop_assert_eq!(derive_id(&key), shifted);
        }

        #[test]
        fn crx_id_is_digest_prefix(key in proptest::collection::vec(any::<u8>(), 0..256)) {
            let digest = Sha256::digest(&key);
            prop_assert_eq!(&derive_crx_id(&key)[..], &digest[..16]);
        }
    }
}
