//! Version registry
//!
//! The canonical list of versions this implementation speaks, and membership
//! tests over it.

use crate::core::VersionNumber;

/// Versions this implementation supports, most preferred first.
///
/// Contains no reserved or sentinel values.
pub const SUPPORTED_VERSIONS: &[VersionNumber] = &[
    VersionNumber::V1,
    VersionNumber::V2,
    VersionNumber::DRAFT_29,
];

/// Check whether `version` is a registered version this implementation supports.
///
/// This is a closed-set test: numbers adjacent to a registered version, the
/// sentinels, reserved versions and gQUIC versions are all invalid.
pub fn is_valid_version(version: VersionNumber) -> bool {
    version == VersionNumber::TLS || is_supported_version(SUPPORTED_VERSIONS, version)
}

/// Check whether `version` appears anywhere in `versions`.
///
/// Sentinels never match, even if a list contains one.
pub fn is_supported_version(versions: &[VersionNumber], version: VersionNumber) -> bool {
    !version.is_sentinel() && versions.contains(&version)
}
