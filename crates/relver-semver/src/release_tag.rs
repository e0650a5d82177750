//! Release tags and their precedence

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pre-release kind of a version, or `Release` for a finished release.
///
/// The discriminant is the precedence rank. Gaps leave room for new kinds
/// without renumbering the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum ReleaseTag {
    Nightly = 1,
    Alpha = 10,
    Beta = 20,
    ReleaseCandidate = 30,
    #[default]
    Release = 1000,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid release tag \"{0}\"")]
pub struct InvalidReleaseTagError(pub String);

impl ReleaseTag {
    /// All tags, lowest precedence first
    pub const ALL: [ReleaseTag; 5] = [
        ReleaseTag::Nightly,
        ReleaseTag::Alpha,
        ReleaseTag::Beta,
        ReleaseTag::ReleaseCandidate,
        ReleaseTag::Release,
    ];

    /// Precedence rank, higher wins
    pub const fn rank(self) -> u16 {
        self as u16
    }

    /// Canonical lowercase name; empty for `Release`
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseTag::Nightly => "nightly",
            ReleaseTag::Alpha => "alpha",
            ReleaseTag::Beta => "beta",
            ReleaseTag::ReleaseCandidate => "rc",
            ReleaseTag::Release => "",
        }
    }

    pub const fn is_prerelease(self) -> bool {
        !matches!(self, ReleaseTag::Release)
    }
}

impl FromStr for ReleaseTag {
    type Err = InvalidReleaseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nightly" => Ok(ReleaseTag::Nightly),
            "alpha" => Ok(ReleaseTag::Alpha),
            // "betha" is the spelling older version strings used
            "beta" | "betha" => Ok(ReleaseTag::Beta),
            "rc" => Ok(ReleaseTag::ReleaseCandidate),
            _ => Err(InvalidReleaseTagError(s.to_string())),
        }
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
