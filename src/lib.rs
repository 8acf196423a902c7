//! # quic-versions
//!
//! QUIC version handling for the layer that sits between packet parsing and
//! the handshake:
//!
//! - **Registry**: which version numbers are real, and how to print any of them
//! - **Negotiation**: the first version both peers speak, in our preference order
//! - **Greasing**: advertised lists with a reserved version spliced in, so peers
//!   can't ossify on the exact shape of the list
//!
//! Everything here is synchronous and stateless. No I/O, no locks.
//!
//! ## Feature Flags
//!
//! - `grease` (default): Greased version lists (pulls in `rand`)
//!
//! ## Modules
//!
//! - [`core`]: Version number type, constants, and error types (always included)
//! - [`registry`]: Supported versions and validity checks (always included)
//! - [`negotiation`]: Version selection, wire lists, and configuration (always included)
//! - [`grease`]: Reserved version injection (requires `grease` feature)
//!
//! ## Example Usage
//!
//! ```rust
//! use quic_versions::prelude::*;
//!
//! let config = VersionConfig::builder()
//!     .versions([VersionNumber::V2, VersionNumber::V1])
//!     .build()
//!     .unwrap();
//!
//! // The peer's list arrives as big-endian numbers, possibly greased.
//! let wire = encode_version_list(&[VersionNumber::new(0x3a4a5a6a), VersionNumber::V1]);
//! let theirs = decode_version_list(&wire).unwrap();
//!
//! match config.negotiate(&theirs) {
//!     Some(version) => assert_eq!(version.to_string(), "v1"),
//!     None => unreachable!("v1 is offered by both sides"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Registry (always included)
pub mod registry;

// Negotiation (always included)
pub mod negotiation;

// Greasing (feature-gated)
#[cfg(feature = "grease")]
#[cfg_attr(docsrs, doc(cfg(feature = "grease")))]
pub mod grease;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::negotiation::*;
    pub use crate::registry::*;

    #[cfg(feature = "grease")]
    pub use crate::grease::*;
}

// Re-export commonly used items at crate root
pub use crate::core::{VersionError, VersionNumber, VersionResult};
pub use crate::negotiation::{
    VersionConfig, VersionConfigBuilder, choose_supported_version, decode_version_list,
    encode_version_list,
};
pub use crate::registry::{SUPPORTED_VERSIONS, is_supported_version, is_valid_version};

#[cfg(feature = "grease")]
pub use crate::grease::{generate_reserved_version, get_greased_versions, greased_versions_with_rng};
