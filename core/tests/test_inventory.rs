// Parse inventory: segment labels and offsets for both container versions.

mod common;

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use crx_core::inventory::{CountingReader, StreamSegment};
    use crx_core::packer::CrxPacker;
    use crx_core::parser::{ContainerVersion, CrxParser};
    use crx_core::source::BufferedSource;

    use super::common::{test_key_pair, PAYLOAD, TEST_KEY_DER_LEN};

    fn packed(version: ContainerVersion) -> Vec<u8> {
        let mut out = Vec::new();
        CrxPacker::for_version(version)
            .pack(&BufferedSource::from(PAYLOAD), &test_key_pair(), &mut out)
            .unwrap();
        out
    }

    fn seg(label: &str, start: u64, end: u64) -> StreamSegment {
        StreamSegment::new(label, start, end)
    }

    #[test]
    fn v2_segments() {
        let bytes = packed(ContainerVersion::Crx2);
        let inv = CrxParser::new().parse_inventory(&mut Cursor::new(&bytes)).unwrap();

        let key_end = 16 + TEST_KEY_DER_LEN as u64;
        assert_eq!(
            inv.segments,
            vec![
                seg("magicNumber", 0, 4),
                seg("version", 4, 8),
                seg("publicKeyLength", 8, 12),
                seg("signatureLength", 12, 16),
                seg("publicKey", 16, key_end),
                seg("signature", key_end, key_end + 128),
            ]
        );
        assert_eq!(inv.payload_offset(), 306);
    }

    #[test]
    fn v3_segments() {
        let bytes = packed(ContainerVersion::Crx3);
        let inv = CrxParser::new().parse_inventory(&mut Cursor::new(&bytes)).unwrap();

        let labels: Vec<&str> = inv.segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["magicNumber", "version", "fileHeaderLength", "fileHeader"]);
        assert_eq!(inv.segments[3], seg("fileHeader", 12, 333));
        assert_eq!(inv.payload_offset() as usize, bytes.len() - PAYLOAD.len());
    }

    #[test]
    fn segments_are_contiguous() {
        for version in [ContainerVersion::Crx2, ContainerVersion::Crx3] {
            let bytes = packed(version);
            let inv = CrxParser::new().parse_inventory(&mut Cursor::new(&bytes)).unwrap();
            for pair in inv.segments.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "{version}");
            }
            let total: u64 = inv.segments.iter().map(StreamSegment::length).sum();
            assert_eq!(total, inv.payload_offset());
        }
    }

    #[test]
    fn tracking_does_not_change_metadata() {
        for version in [ContainerVersion::Crx2, ContainerVersion::Crx3] {
            let bytes = packed(version);
            let plain = CrxParser::new().parse(&mut Cursor::new(&bytes)).unwrap();
            let inv = CrxParser::new().parse_inventory(&mut Cursor::new(&bytes)).unwrap();
            assert_eq!(inv.metadata, plain);
        }
    }

    #[test]
    fn counting_reader_reports_payload_offset() {
        let bytes = packed(ContainerVersion::Crx2);
        let mut reader = CountingReader::new(Cursor::new(&bytes));
        CrxParser::new().parse_counted(&mut reader).unwrap();
        assert_eq!(reader.position(), 306);
        assert!(reader.segments().is_empty());

        let mut inner = reader.into_inner();
        let mut rest = Vec::new();
        inner.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, PAYLOAD);
    }

    #[test]
    fn failed_parse_keeps_partial_segments_local() {
        let mut reader = CountingReader::tracked(Cursor::new(b"Cr24".to_vec()));
        assert!(CrxParser::new().parse_counted(&mut reader).unwrap_err().is_eof());
        assert_eq!(reader.segments()[0], seg("magicNumber", 0, 4));
    }

    #[test]
    fn json_dump_lists_labels() {
        let bytes = packed(ContainerVersion::Crx3);
        let inv = CrxParser::new().parse_inventory(&mut Cursor::new(&bytes)).unwrap();
        let json = inv.segments_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[2]["label"], "fileHeaderLength");
        assert_eq!(value[3]["end"], 333);
    }
}
