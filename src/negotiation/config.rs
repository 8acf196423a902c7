//! Version configuration.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::selector::choose_supported_version;
use crate::core::{VersionError, VersionNumber, VersionResult};
use crate::registry::SUPPORTED_VERSIONS;

/// The versions an endpoint offers, in preference order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    /// Offered versions, most preferred first.
    supported: Vec<VersionNumber>,

    /// Whether advertised lists carry a reserved version.
    grease: bool,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            supported: SUPPORTED_VERSIONS.to_vec(),
            grease: true,
        }
    }
}

impl VersionConfig {
    /// Create a builder starting from the registry defaults.
    pub fn builder() -> VersionConfigBuilder {
        VersionConfigBuilder::new()
    }

    /// Offered versions, most preferred first.
    pub fn supported(&self) -> &[VersionNumber] {
        &self.supported
    }

    /// Most preferred version.
    pub fn preferred(&self) -> VersionNumber {
        self.supported[0]
    }

    /// Whether advertised lists are greased.
    pub fn grease(&self) -> bool {
        self.grease
    }

    /// Choose a version from a peer's offer, honoring our preference order.
    pub fn negotiate(&self, theirs: &[VersionNumber]) -> Option<VersionNumber> {
        choose_supported_version(&self.supported, theirs)
    }

    /// The list to put on the wire, greased if enabled.
    #[cfg(feature = "grease")]
    #[cfg_attr(docsrs, doc(cfg(feature = "grease")))]
    pub fn advertised(&self) -> Vec<VersionNumber> {
        if self.grease {
            crate::grease::get_greased_versions(&self.supported)
        } else {
            self.supported.clone()
        }
    }
}

/// Builder for [`VersionConfig`].
#[derive(Debug, Clone)]
pub struct VersionConfigBuilder {
    supported: Vec<VersionNumber>,
    grease: bool,
}

impl VersionConfigBuilder {
    /// Create a new builder with the registry defaults.
    pub fn new() -> Self {
        let config = VersionConfig::default();
        Self {
            supported: config.supported,
            grease: config.grease,
        }
    }

    /// Replace the offered versions. Order is preference order.
    pub fn versions(mut self, versions: impl IntoIterator<Item = VersionNumber>) -> Self {
        self.supported = versions.into_iter().collect();
        self
    }

    /// Enable or disable greasing of advertised lists.
    pub fn grease(mut self, enabled: bool) -> Self {
        self.grease = enabled;
        self
    }

    /// Validate and build the configuration.
    ///
    /// Rejects an empty list, sentinels, reserved versions and duplicates.
    /// Unregistered versions are allowed; the registry only covers what this
    /// crate knows by name.
    pub fn build(self) -> VersionResult<VersionConfig> {
        if self.supported.is_empty() {
            warn!("rejecting version config: no versions");
            return Err(VersionError::EmptySupportedList);
        }

        let mut seen = HashSet::with_capacity(self.supported.len());
        for &version in &self.supported {
            let err = if version.is_sentinel() {
                VersionError::SentinelVersion(version)
            } else if version.is_reserved() {
                VersionError::ReservedVersion(version)
            } else if !seen.insert(version) {
                VersionError::DuplicateVersion(version)
            } else {
                continue;
            };
            warn!(%version, "rejecting version config: {err}");
            return Err(err);
        }

        debug!(versions = ?self.supported, grease = self.grease, "built version config");
        Ok(VersionConfig {
            supported: self.supported,
            grease: self.grease,
        })
    }
}

impl Default for VersionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
