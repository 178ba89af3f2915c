#![deny(missing_docs)]

//! # Semantic Versioning
//!
//! Immutable semantic-version values and the increment rules applied to them
//! when a builder commits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of change between two committed classes.
///
/// Selects which component of a [`SemVer`] is incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    /// Breaking change - resets minor and patch.
    Major,
    /// Backwards-compatible feature - resets patch.
    Minor,
    /// Backwards-compatible fix.
    Patch,
}

/// A Semantic Version.
///
/// Components are unsigned, so negative versions are unrepresentable.
/// Values are never mutated in place; every increment returns a new value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct SemVer {
    /// MAJOR version.
    pub major: u64,
    /// MINOR version.
    pub minor: u64,
    /// PATCH version.
    pub patch: u64,
}

impl SemVer {
    /// Constructs a new `SemVer` from its three components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns a new `SemVer` with the component selected by `change`
    /// incremented.
    pub fn increment(&self, change: Change) -> Self {
        match change {
            Change::Major => self.increment_major(),
            Change::Minor => self.increment_minor(),
            Change::Patch => self.increment_patch(),
        }
    }

    /// Returns a new `SemVer` with the major version incremented.
    pub fn increment_major(&self) -> Self {
        Self::new(self.major + 1, 0, 0)
    }

    /// Returns a new `SemVer` with the minor version incremented.
    pub fn increment_minor(&self) -> Self {
        Self::new(self.major, self.minor + 1, 0)
    }

    /// Returns a new `SemVer` with the patch version incremented.
    pub fn increment_patch(&self) -> Self {
        Self::new(self.major, self.minor, self.patch + 1)
    }

    /// Renders this version as `v{major}.{minor}.{patch}`, always with all
    /// three components.
    pub fn to_complete_version_string(&self) -> String {
        format!("v{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Renders this version as `v{major}.{minor}.{patch}` with trailing zero
    /// components omitted.
    ///
    /// `1.0.0` renders as `v1`, `1.2.0` as `v1.2` and `1.2.3` as `v1.2.3`.
    pub fn to_short_version_string(&self) -> String {
        if self.patch > 0 {
            return format!("v{}.{}.{}", self.major, self.minor, self.patch);
        }
        if self.minor > 0 {
            return format!("v{}.{}", self.major, self.minor);
        }
        format!("v{}", self.major)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_complete_version_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_major_resets_lower_components() {
        let version = SemVer::new(1, 2, 3);
        assert_eq!(version.increment(Change::Major), SemVer::new(2, 0, 0));
    }

    #[test]
    fn test_increment_minor_resets_patch() {
        let version = SemVer::new(1, 2, 3);
        assert_eq!(version.increment(Change::Minor), SemVer::new(1, 3, 0));
    }

    #[test]
    fn test_increment_patch() {
        let version = SemVer::new(1, 2, 3);
        assert_eq!(version.increment(Change::Patch), SemVer::new(1, 2, 4));
    }

    #[test]
    fn test_increment_returns_new_value() {
        let version = SemVer::new(1, 0, 0);
        let _ = version.increment_major();
        assert_eq!(version, SemVer::new(1, 0, 0));
    }

    #[test]
    fn test_complete_version_string() {
        assert_eq!(SemVer::new(0, 0, 0).to_complete_version_string(), "v0.0.0");
        assert_eq!(SemVer::new(1, 2, 3).to_complete_version_string(), "v1.2.3");
        assert_eq!(SemVer::new(2, 0, 0).to_complete_version_string(), "v2.0.0");
    }

    #[test]
    fn test_short_version_string_omits_trailing_zeros() {
        assert_eq!(SemVer::new(1, 0, 0).to_short_version_string(), "v1");
        assert_eq!(SemVer::new(1, 2, 0).to_short_version_string(), "v1.2");
        assert_eq!(SemVer::new(1, 2, 3).to_short_version_string(), "v1.2.3");
        assert_eq!(SemVer::new(0, 0, 1).to_short_version_string(), "v0.0.1");
    }

    #[test]
    fn test_display_uses_complete_rendering() {
        assert_eq!(format!("{}", SemVer::new(1, 2, 0)), "v1.2.0");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(SemVer::default(), SemVer::new(0, 0, 0));
    }

    #[test]
    fn test_total_order() {
        assert!(SemVer::new(1, 0, 0) < SemVer::new(1, 0, 1));
        assert!(SemVer::new(1, 9, 9) < SemVer::new(2, 0, 0));
        assert!(SemVer::new(1, 2, 0) < SemVer::new(1, 10, 0));
    }
}
