//! Release version library
//!
//! This crate provides parsing, formatting and ordering of
//! `major.minor.patch[-tag[.number]]` release versions.

mod comparator;
mod formatter;
mod operator;
mod release_tag;
mod semver;
mod version;
mod version_parser;

pub use comparator::{compare_versions, Comparator, ComparatorError};
pub use formatter::{format_version, LowZeros, VersionFormatter};
pub use operator::{InvalidOperatorError, Operator};
pub use release_tag::{InvalidReleaseTagError, ReleaseTag};
pub use semver::Semver;
pub use version::{Version, MAX_RELEASE_NUMBER};
pub use version_parser::{parse_version, parse_version_lenient, Field, ParsePolicy, VersionParser, VersionParserError};
