//! The version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::formatter::{format_version, LowZeros};
use crate::release_tag::ReleaseTag;
use crate::version_parser::{VersionParser, VersionParserError};

/// Largest release number that is kept; anything above resets to 0.
pub const MAX_RELEASE_NUMBER: u32 = 99;

/// A `major.minor.patch[-tag[.number]]` version.
///
/// Fields are only set through [`Version::new`], [`Version::set`] or the
/// parser, which keep two invariants: the release number is in
/// `0..=MAX_RELEASE_NUMBER`, and it is 0 whenever the tag is
/// [`ReleaseTag::Release`].
///
/// The value is not internally synchronized. [`Version::set`] takes
/// `&mut self`, so sharing an instance that is being mutated needs a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    release_tag: ReleaseTag,
    release_number: u8,
}

impl Version {
    /// Create a version from its five fields.
    ///
    /// A release number above [`MAX_RELEASE_NUMBER`] resets to 0, and the
    /// number is dropped for a finished release.
    pub const fn new(
        major: u32,
        minor: u32,
        patch: u32,
        release_tag: ReleaseTag,
        release_number: u32,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            release_tag,
            release_number: normalize_release_number(release_tag, release_number),
        }
    }

    /// Create a finished release version
    pub const fn release(major: u32, minor: u32, patch: u32) -> Self {
        Self::new(major, minor, patch, ReleaseTag::Release, 0)
    }

    /// Replace all fields at once
    pub fn set(
        &mut self,
        major: u32,
        minor: u32,
        patch: u32,
        release_tag: ReleaseTag,
        release_number: u32,
    ) {
        *self = Self::new(major, minor, patch, release_tag, release_number);
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn release_tag(&self) -> ReleaseTag {
        self.release_tag
    }

    /// Pre-release sequence number; 0 means none
    pub fn release_number(&self) -> u32 {
        self.release_number as u32
    }

    pub fn is_prerelease(&self) -> bool {
        self.release_tag.is_prerelease()
    }
}

const fn normalize_release_number(release_tag: ReleaseTag, release_number: u32) -> u8 {
    if !release_tag.is_prerelease() || release_number > MAX_RELEASE_NUMBER {
        0
    } else {
        release_number as u8
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::new(0, 1, 0, ReleaseTag::Release, 0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_version(self, LowZeros::Show))
    }
}
