//! Error types for version handling.

use thiserror::Error;

use super::version::VersionNumber;

/// Errors from decoding version lists and validating version configuration.
///
/// The registry, selector and greasing operations are total and never
/// return these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Encoded version list length is not a multiple of the version size.
    #[error("truncated version list: {len} bytes is not a multiple of 4")]
    TruncatedList {
        /// Length of the encoded list in bytes.
        len: usize,
    },

    /// A configuration must offer at least one version.
    #[error("supported version list is empty")]
    EmptySupportedList,

    /// Reserved (greased) versions can't be offered as real versions.
    #[error("reserved version in supported list: {0}")]
    ReservedVersion(VersionNumber),

    /// Sentinels can't be offered as real versions.
    #[error("sentinel version in supported list: {0}")]
    SentinelVersion(VersionNumber),

    /// Each version may appear only once in a supported list.
    #[error("duplicate version in supported list: {0}")]
    DuplicateVersion(VersionNumber),
}

/// Result alias for version operations.
pub type VersionResult<T> = Result<T, VersionError>;
