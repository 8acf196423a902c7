//! Version negotiation
//!
//! Picks the version both peers speak, honoring the local preference order,
//! and carries version lists to and from their wire form.
//!
//! ## Wire Format
//!
//! A Version Negotiation packet ends with the server's supported versions,
//! each a 4-byte big-endian number (RFC 9000 Section 17.2.1):
//!
//! ```text
//! +0   Supported Version (4 bytes BE32)
//! +4   Supported Version (4 bytes BE32)
//! ...
//! ```

mod config;
mod selector;
mod wire;

pub use config::*;
pub use selector::*;
pub use wire::*;
