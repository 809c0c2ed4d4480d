use crate::error::{Result, VersionSyncError};
use clap::ValueEnum;
use std::fmt;

/// A bare `major.minor.patch` version.
///
/// The exact text is kept as given: no `v` prefix is stripped and leading
/// zeros are not normalized away, so `01.2.3` renders as `01.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    text: String,
}

impl Version {
    /// Create a version from its components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            text: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Parse and validate a version string (e.g., "1.2.3").
    ///
    /// Accepts exactly three dot-separated runs of ASCII digits with nothing
    /// before or after them. `1.2`, `v1.2.3`, `1.2.3-rc1` and ` 1.2.3` are all
    /// rejected with [`VersionSyncError::InvalidVersionFormat`].
    pub fn parse(candidate: &str) -> Result<Self> {
        let parts: Vec<&str> = candidate.split('.').collect();
        let well_formed = parts.len() == 3
            && parts
                .iter()
                .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));

        if !well_formed {
            return Err(VersionSyncError::InvalidVersionFormat(
                candidate.to_string(),
            ));
        }

        Ok(Version {
            text: candidate.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric components; fails only when a component overflows `u64`.
    pub fn components(&self) -> Result<(u64, u64, u64)> {
        let mut parts = self.text.split('.').map(|part| {
            part.parse::<u64>()
                .map_err(|_| VersionSyncError::InvalidVersionFormat(self.text.clone()))
        });
        match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), Some(patch)) => Ok((major?, minor?, patch?)),
            _ => Err(VersionSyncError::InvalidVersionFormat(self.text.clone())),
        }
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let (major, minor, patch) = self.components()?;
        let overflow = || VersionSyncError::InvalidVersionFormat(self.text.clone());
        let next = match bump_type {
            VersionBump::Major => Version::new(major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            VersionBump::Minor => {
                Version::new(major, minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            VersionBump::Patch => {
                Version::new(major, minor, patch.checked_add(1).ok_or_else(overflow)?)
            }
        };
        Ok(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
