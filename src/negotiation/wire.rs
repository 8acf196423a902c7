//! Version list wire encoding.

use crate::core::{VERSION_SIZE, VersionError, VersionNumber, VersionResult};

/// Wire size of an encoded version list.
pub fn version_list_wire_size(versions: &[VersionNumber]) -> usize {
    versions.len() * VERSION_SIZE
}

/// Encode a version list as consecutive big-endian numbers.
pub fn encode_version_list(versions: &[VersionNumber]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(version_list_wire_size(versions));
    for v in versions {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    buf
}

/// Decode a version list.
///
/// Every 4-byte value is accepted as-is; reserved, sentinel and duplicate
/// entries are left for negotiation to ignore.
pub fn decode_version_list(data: &[u8]) -> VersionResult<Vec<VersionNumber>> {
    if data.len() % VERSION_SIZE != 0 {
        return Err(VersionError::TruncatedList { len: data.len() });
    }

    Ok(data
        .chunks_exact(VERSION_SIZE)
        .map(|chunk| {
            VersionNumber::from_be_bytes(chunk.try_into().expect("chunk is VERSION_SIZE bytes"))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_version_list() {
        let encoded = encode_version_list(&[VersionNumber::V1, VersionNumber::V2]);
        assert_eq!(hex::encode(&encoded), "000000016b3343cf");
        assert_eq!(encoded.len(), version_list_wire_size(&[VersionNumber::V1, VersionNumber::V2]));
    }

    #[test]
    fn test_decode_peer_list() {
        let data = hex::decode("ff00001d1a2a3a4a00000001ff00001d").unwrap();
        let decoded = decode_version_list(&data).unwrap();
        assert_eq!(
            decoded,
            vec![
                VersionNumber::DRAFT_29,
                VersionNumber::new(0x1a2a3a4a),
                VersionNumber::V1,
                VersionNumber::DRAFT_29,
            ]
        );
        assert!(decoded[1].is_reserved());
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_version_list(&[]).unwrap().is_empty());
        assert!(encode_version_list(&[]).is_empty());
    }

    #[test]
    fn test_decode_truncated() {
        let data = hex::decode("00000001ff0000").unwrap();
        let result = decode_version_list(&data);
        assert!(matches!(result, Err(VersionError::TruncatedList { len: 7 })));
    }
}
