//! Negotiation selector.

use tracing::trace;

use crate::core::VersionNumber;
use crate::registry::is_supported_version;

/// Choose the first version in `ours` that `theirs` also offers.
///
/// `ours` is authoritative for preference; the order of `theirs` only matters
/// for membership. `theirs` is untrusted and may hold duplicates, sentinels
/// or reserved versions, none of which cause an error.
///
/// Returns `None` if the lists have no version in common, including when
/// either list is empty. Callers must treat `None` as a failed negotiation.
///
/// ```
/// use quic_versions::{choose_supported_version, VersionNumber};
///
/// let ours = [VersionNumber::new(2), VersionNumber::new(1), VersionNumber::new(3)];
/// let theirs = [VersionNumber::new(3), VersionNumber::new(1), VersionNumber::new(2)];
/// assert_eq!(choose_supported_version(&ours, &theirs), Some(VersionNumber::new(2)));
/// ```
pub fn choose_supported_version(
    ours: &[VersionNumber],
    theirs: &[VersionNumber],
) -> Option<VersionNumber> {
    let chosen = ours
        .iter()
        .copied()
        .find(|&v| is_supported_version(theirs, v));

    match chosen {
        Some(version) => trace!(%version, "negotiated version"),
        None => trace!(ours = ours.len(), theirs = theirs.len(), "no common version"),
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(raw: &[u32]) -> Vec<VersionNumber> {
        raw.iter().copied().map(VersionNumber::new).collect()
    }

    #[test]
    fn test_finds_supported_version() {
        let ours = versions(&[1, 2, 3]);
        let theirs = versions(&[6, 5, 4, 3]);
        assert_eq!(
            choose_supported_version(&ours, &theirs),
            Some(VersionNumber::new(3))
        );
    }

    #[test]
    fn test_picks_preferred_version() {
        let ours = versions(&[2, 1, 3]);
        let theirs = versions(&[3, 6, 1, 8, 2, 10]);
        assert_eq!(
            choose_supported_version(&ours, &theirs),
            Some(VersionNumber::new(2))
        );
    }

    #[test]
    fn test_no_matching_version() {
        assert_eq!(choose_supported_version(&versions(&[1]), &versions(&[2])), None);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(choose_supported_version(&versions(&[102, 101]), &[]), None);
        assert_eq!(choose_supported_version(&[], &versions(&[1, 2])), None);
        assert_eq!(choose_supported_version(&[], &[]), None);
    }

    #[test]
    fn test_untrusted_peer_list() {
        let ours = vec![VersionNumber::V2, VersionNumber::V1];
        let theirs = vec![
            VersionNumber::new(0x1a2a3a4a),
            VersionNumber::V1,
            VersionNumber::new(0x0a0a0a0a),
            VersionNumber::V1,
            VersionNumber::WHATEVER,
        ];
        assert_eq!(choose_supported_version(&ours, &theirs), Some(VersionNumber::V1));
    }

    #[test]
    fn test_reserved_only_peer_list() {
        let theirs = versions(&[0x0a0a0a0a, 0xfafafafa]);
        assert_eq!(choose_supported_version(crate::SUPPORTED_VERSIONS, &theirs), None);
    }

    #[test]
    fn test_sentinels_never_negotiated() {
        let ours = vec![VersionNumber::UNKNOWN, VersionNumber::WHATEVER];
        let theirs = vec![VersionNumber::WHATEVER, VersionNumber::UNKNOWN];
        assert_eq!(choose_supported_version(&ours, &theirs), None);
    }
}
