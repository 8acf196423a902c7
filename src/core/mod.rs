//! Core version types, constants, and errors.
//!
//! This module has no I/O and no randomness; everything else in the crate
//! builds on the [`VersionNumber`] value type defined here.

mod constants;
mod error;
mod version;

pub use constants::*;
pub use error::*;
pub use version::*;
