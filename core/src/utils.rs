use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a registry value by variant name, falling back to hex for unknown raw values.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Printable ASCII as a byte-string literal, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ContainerVersion;

    #[test]
    fn fmt_bytes_prefers_ascii() {
        assert_eq!(fmt_bytes(b"Cr24"), "b\"Cr24\"");
        assert_eq!(fmt_bytes(&[0x50, 0x4b, 0x03, 0x04]), "0x504b0304");
    }

    #[test]
    fn enum_name_or_hex_known_and_unknown() {
        assert_eq!(enum_name_or_hex::<ContainerVersion>(3), "Crx3");
        assert_eq!(enum_name_or_hex::<ContainerVersion>(0x10), "0x10");
    }
}
