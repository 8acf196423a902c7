//! The version number value type.
//!
//! A QUIC version is a 32-bit number carried big-endian on the wire. Besides
//! the registered versions, the numbering space holds two sentinels, the
//! reserved `0x?a?a?a?a` family used for greasing, and the legacy gQUIC
//! family `Q0nn`.

use std::fmt;

use super::constants::{
    GQUIC_VERSION_0, GQUIC_VERSION_PREFIX, RESERVED_VERSION_MASK, RESERVED_VERSION_PATTERN,
    VERSION_1_RAW, VERSION_2_RAW, VERSION_DRAFT_29_RAW, VERSION_SIZE, VERSION_UNKNOWN_RAW,
    VERSION_WHATEVER_RAW,
};

/// A QUIC version number.
///
/// Values are immutable and cheap to copy. Formatting with `{}` renders the
/// human-readable label:
///
/// ```
/// use quic_versions::VersionNumber;
///
/// assert_eq!(VersionNumber::V1.to_string(), "v1");
/// assert_eq!(VersionNumber::new(0x51303039).to_string(), "gQUIC 9");
/// assert_eq!(VersionNumber::new(0x01234567).to_string(), "0x1234567");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VersionNumber(u32);

impl VersionNumber {
    /// Unset version. Never negotiable.
    pub const UNKNOWN: Self = Self(VERSION_UNKNOWN_RAW);

    /// Wildcard for callers that don't care which version is used. Never negotiable.
    pub const WHATEVER: Self = Self(VERSION_WHATEVER_RAW);

    /// QUIC version 1 (RFC 9000).
    pub const V1: Self = Self(VERSION_1_RAW);

    /// QUIC version 2 (RFC 9369).
    pub const V2: Self = Self(VERSION_2_RAW);

    /// draft-ietf-quic-transport-29.
    pub const DRAFT_29: Self = Self(VERSION_DRAFT_29_RAW);

    /// The version using the TLS 1.3 handshake. Same number as [`Self::V1`].
    pub const TLS: Self = Self::V1;

    /// Wrap a raw version number.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw version number.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Decode from wire format (big-endian).
    pub const fn from_be_bytes(bytes: [u8; VERSION_SIZE]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Encode to wire format (big-endian).
    pub const fn to_be_bytes(self) -> [u8; VERSION_SIZE] {
        self.0.to_be_bytes()
    }

    /// Check whether this is a reserved version (`0x?a?a?a?a`).
    ///
    /// Reserved versions are never assigned protocol meaning and must never
    /// be negotiated.
    pub const fn is_reserved(self) -> bool {
        self.0 & RESERVED_VERSION_MASK == RESERVED_VERSION_PATTERN
    }

    /// Check whether this is one of the two sentinels.
    pub const fn is_sentinel(self) -> bool {
        self.0 == VERSION_UNKNOWN_RAW || self.0 == VERSION_WHATEVER_RAW
    }

    /// Check whether this number uses the legacy gQUIC encoding.
    pub const fn is_gquic(self) -> bool {
        self.gquic_revision().is_some()
    }

    /// Decode the legacy gQUIC revision.
    ///
    /// gQUIC versions are the ASCII bytes `'Q' '0' d d`; the two trailing
    /// digits form the revision, so `0x51303339` is revision 39.
    pub const fn gquic_revision(self) -> Option<u32> {
        if (self.0 >> 16) as u16 != GQUIC_VERSION_PREFIX || self.0 == GQUIC_VERSION_0 {
            return None;
        }
        let [_, _, tens, ones] = self.0.to_be_bytes();
        if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
            return None;
        }
        Some((tens - b'0') as u32 * 10 + (ones - b'0') as u32)
    }

    /// Fixed label for sentinels and registered versions.
    fn label(self) -> Option<&'static str> {
        match self {
            Self::UNKNOWN => Some("unknown"),
            Self::WHATEVER => Some("whatever"),
            Self::DRAFT_29 => Some("draft-29"),
            Self::V1 => Some("v1"),
            Self::V2 => Some("v2"),
            _ => None,
        }
    }
}

impl From<u32> for VersionNumber {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<VersionNumber> for u32 {
    fn from(version: VersionNumber) -> Self {
        version.0
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label() {
            return f.write_str(label);
        }
        match self.gquic_revision() {
            Some(revision) => write!(f, "gQUIC {revision}"),
            None => write!(f, "{:#x}", self.0),
        }
    }
}

impl fmt::LowerHex for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(VersionNumber::WHATEVER.to_string(), "whatever");
        assert_eq!(VersionNumber::UNKNOWN.to_string(), "unknown");
        assert_eq!(VersionNumber::DRAFT_29.to_string(), "draft-29");
        assert_eq!(VersionNumber::V1.to_string(), "v1");
        assert_eq!(VersionNumber::V2.to_string(), "v2");
        assert_eq!(VersionNumber::TLS.to_string(), "v1");
    }

    #[test]
    fn test_gquic_labels() {
        assert_eq!(VersionNumber::new(0x51303039).to_string(), "gQUIC 9");
        assert_eq!(VersionNumber::new(0x51303133).to_string(), "gQUIC 13");
        assert_eq!(VersionNumber::new(0x51303235).to_string(), "gQUIC 25");
        assert_eq!(VersionNumber::new(0x51303438).to_string(), "gQUIC 48");
        assert_eq!(VersionNumber::new(0x51303939).to_string(), "gQUIC 99");
    }

    #[test]
    fn test_gquic_requires_digits() {
        // 'Q' '0' '0' ':' is not a digit pair
        assert_eq!(VersionNumber::new(0x5130303a).gquic_revision(), None);
        assert_eq!(VersionNumber::new(0x5130303a).to_string(), "0x5130303a");
        // 'Q' '1' '0' '9'
        assert_eq!(VersionNumber::new(0x51313039).gquic_revision(), None);
        // Q000 was never a version
        assert_eq!(VersionNumber::new(GQUIC_VERSION_0).to_string(), "0x51303030");
    }

    #[test]
    fn test_hex_fallback() {
        assert_eq!(VersionNumber::new(0x01234567).to_string(), "0x1234567");
        assert_eq!(VersionNumber::new(1234).to_string(), "0x4d2");
        assert_eq!(VersionNumber::new(0xff00001c).to_string(), "0xff00001c");
    }

    #[test]
    fn test_hex_fallback_is_lossless() {
        for raw in [0x2u32, 0x1a2a3a4a, 0xdeadbeef, 0x7fff_ffff, 0xff00_0020] {
            let text = VersionNumber::new(raw).to_string();
            let parsed = u32::from_str_radix(text.trim_start_matches("0x"), 16).unwrap();
            assert_eq!(parsed, raw);
        }
    }

    #[test]
    fn test_reserved_pattern() {
        assert!(VersionNumber::new(0x0a0a0a0a).is_reserved());
        assert!(VersionNumber::new(0x1a2a3a4a).is_reserved());
        assert!(VersionNumber::new(0xfafafafa).is_reserved());
        assert!(!VersionNumber::new(0x0a0a0a0b).is_reserved());
        assert!(!VersionNumber::TLS.is_reserved());
        assert!(!VersionNumber::UNKNOWN.is_reserved());
        assert!(!VersionNumber::WHATEVER.is_reserved());
    }

    #[test]
    fn test_sentinels() {
        assert!(VersionNumber::UNKNOWN.is_sentinel());
        assert!(VersionNumber::WHATEVER.is_sentinel());
        assert!(!VersionNumber::V1.is_sentinel());
        assert_eq!(VersionNumber::default(), VersionNumber::UNKNOWN);
    }

    #[test]
    fn test_wire_bytes() {
        let v2 = VersionNumber::from_be_bytes([0x6b, 0x33, 0x43, 0xcf]);
        assert_eq!(v2, VersionNumber::V2);
        assert_eq!(VersionNumber::DRAFT_29.to_be_bytes(), [0xff, 0x00, 0x00, 0x1d]);
        assert_eq!(u32::from(VersionNumber::from(7u32)), 7);
        assert_eq!(format!("{:08x}", VersionNumber::V1), "00000001");
    }
}
