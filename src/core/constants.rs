//! Version number constants.
//!
//! These values are fixed by the QUIC version registry and MUST NOT be changed.

// =============================================================================
// RESERVED VERSIONS (RFC 9000 Section 15)
// =============================================================================

/// Mask selecting the low nibble of every byte of a version number.
pub const RESERVED_VERSION_MASK: u32 = 0x0f0f_0f0f;

/// Pattern the masked bits of a reserved version must match (`0x?a?a?a?a`).
pub const RESERVED_VERSION_PATTERN: u32 = 0x0a0a_0a0a;

/// Mask that clears every bit a reserved version must not have set.
pub const RESERVED_VERSION_CLEAR_MASK: u32 = 0xfafa_fafa;

// =============================================================================
// SENTINELS
// =============================================================================

/// Raw value of the "unknown" sentinel (unset version).
pub const VERSION_UNKNOWN_RAW: u32 = 0x0000_0000;

/// Raw value of the "whatever" sentinel (the version doesn't matter).
pub const VERSION_WHATEVER_RAW: u32 = 0xffff_ffff;

// =============================================================================
// REGISTERED VERSIONS
// =============================================================================

/// QUIC version 1 (RFC 9000). Also the version carrying the TLS handshake.
pub const VERSION_1_RAW: u32 = 0x0000_0001;

/// QUIC version 2 (RFC 9369).
pub const VERSION_2_RAW: u32 = 0x6b33_43cf;

/// draft-ietf-quic-transport-29.
pub const VERSION_DRAFT_29_RAW: u32 = 0xff00_001d;

// =============================================================================
// LEGACY gQUIC ENCODING
// =============================================================================

/// Upper two bytes of every legacy gQUIC version (`'Q' '0'`).
pub const GQUIC_VERSION_PREFIX: u16 = 0x5130;

/// Legacy gQUIC version zero (`"Q000"`), never deployed.
pub const GQUIC_VERSION_0: u32 = 0x5130_3030;

// =============================================================================
// WIRE FORMAT
// =============================================================================

/// Size of a version number on the wire (big-endian).
pub const VERSION_SIZE: usize = 4;
