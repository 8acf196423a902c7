//! Version list greasing
//!
//! Splices one reserved version into an advertised version list so that
//! peers which assume a fixed list length, a fixed position for the real
//! version, or no unknown entries break early instead of ossifying the
//! protocol (RFC 9000 Section 6.3).

use rand::{Rng, RngCore};
use tracing::debug;

use crate::core::{RESERVED_VERSION_CLEAR_MASK, RESERVED_VERSION_MASK, VersionNumber};

/// Generate a random reserved version (`0x?a?a?a?a`).
///
/// The high nibble of every byte is random; the low nibble is always `a`.
pub fn generate_reserved_version<R: RngCore + ?Sized>(rng: &mut R) -> VersionNumber {
    VersionNumber::new((rng.next_u32() | RESERVED_VERSION_MASK) & RESERVED_VERSION_CLEAR_MASK)
}

/// Return `supported` with one reserved version inserted at a random position.
///
/// Uses the thread-local RNG. The real entries keep their relative order.
///
/// ```
/// use quic_versions::{get_greased_versions, VersionNumber};
///
/// let supported = [VersionNumber::V1, VersionNumber::V2];
/// let greased = get_greased_versions(&supported);
/// assert_eq!(greased.len(), 3);
///
/// let real: Vec<_> = greased.into_iter().filter(|v| !v.is_reserved()).collect();
/// assert_eq!(real, supported);
/// ```
pub fn get_greased_versions(supported: &[VersionNumber]) -> Vec<VersionNumber> {
    greased_versions_with_rng(supported, &mut rand::thread_rng())
}

/// Like [`get_greased_versions`], drawing from a caller-supplied RNG.
///
/// The insertion index is uniform over all `supported.len() + 1` positions,
/// so both ends are reachable. The injected version never equals an entry
/// already in `supported`.
pub fn greased_versions_with_rng<R: Rng + ?Sized>(
    supported: &[VersionNumber],
    rng: &mut R,
) -> Vec<VersionNumber> {
    let reserved = loop {
        let candidate = generate_reserved_version(rng);
        if !supported.contains(&candidate) {
            break candidate;
        }
    };
    let position = rng.gen_range(0..=supported.len());

    let mut greased = Vec::with_capacity(supported.len() + 1);
    greased.extend_from_slice(&supported[..position]);
    greased.push(reserved);
    greased.extend_from_slice(&supported[position..]);

    debug!(%reserved, position, len = greased.len(), "greased version list");
    greased
}
