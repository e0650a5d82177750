//! Version string parsing
//!
//! Accepted grammar:
//!
//! ```text
//! version := major [ "." minor [ "." patch ] ] [ "-" tag [ "." number ] ] [ "+" build ]
//! tag     := "nightly" | "alpha" | "beta" | "betha" | "rc"
//! ```
//!
//! Missing minor and patch default to 0. The build suffix is checked and
//! then discarded.

use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::release_tag::ReleaseTag;
use crate::version::{Version, MAX_RELEASE_NUMBER};

/// Positional field of a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    ReleaseTag,
    ReleaseNumber,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::ReleaseTag => "release_tag",
            Field::ReleaseNumber => "release_number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid {field} \"{token}\"")]
    InvalidField { field: Field, token: String },
    #[error("Value of {field} \"{token}\" is out of range")]
    OutOfRange { field: Field, token: String },
    #[error("Unexpected trailing input \"{0}\"")]
    TrailingInput(String),
    #[error("Invalid build metadata \"{0}\"")]
    InvalidBuildMetadata(String),
}

impl VersionParserError {
    /// The field that failed, if the error concerns a single field
    pub fn field(&self) -> Option<Field> {
        match self {
            VersionParserError::InvalidField { field, .. } | VersionParserError::OutOfRange { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

/// How malformed input is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Reject malformed tokens with an error
    #[default]
    Strict,
    /// Never fail: malformed numbers become 0, unknown tags become a release
    Lenient,
}

lazy_static! {
    static ref DIGITS_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref BUILD_METADATA_RE: Regex = Regex::new(r"^[0-9A-Za-z.-]+$").unwrap();
}

/// Version parser
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    policy: ParsePolicy,
}

impl VersionParser {
    /// Create a strict parser
    pub fn new() -> Self {
        VersionParser {
            policy: ParsePolicy::Strict,
        }
    }

    pub fn with_policy(policy: ParsePolicy) -> Self {
        VersionParser { policy }
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Check if a version string is accepted by this parser
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string. Never fails under [`ParsePolicy::Lenient`].
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        match self.policy {
            ParsePolicy::Strict => parse_strict(version),
            ParsePolicy::Lenient => Ok(parse_lenient(version)),
        }
    }
}

/// Parse a version string, rejecting malformed input
pub fn parse_version(version: &str) -> Result<Version, VersionParserError> {
    parse_strict(version)
}

/// Parse a version string, defaulting whatever does not parse
pub fn parse_version_lenient(version: &str) -> Version {
    parse_lenient(version)
}

/// Split off the build suffix and the release segment
fn split_segments(version: &str) -> (&str, Option<&str>, Option<&str>) {
    let (core, build) = match version.split_once('+') {
        Some((core, build)) => (core, Some(build)),
        None => (version, None),
    };
    let (numeric, release) = match core.split_once('-') {
        Some((numeric, release)) => (numeric, Some(release)),
        None => (core, None),
    };
    (numeric, release, build)
}

fn parse_strict(version: &str) -> Result<Version, VersionParserError> {
    let version = version.trim();
    let (numeric, release, build) = split_segments(version);

    if let Some(build) = build {
        if !BUILD_METADATA_RE.is_match(build) {
            return Err(VersionParserError::InvalidBuildMetadata(build.to_string()));
        }
        debug!("Discarding build metadata \"{}\" of \"{}\"", build, version);
    }

    // split always yields at least one token, possibly empty
    let mut tokens = numeric.split('.');
    let major = parse_number(Field::Major, tokens.next().unwrap_or(""))?;
    let minor = tokens.next().map(|t| parse_number(Field::Minor, t)).transpose()?.unwrap_or(0);
    let patch = tokens.next().map(|t| parse_number(Field::Patch, t)).transpose()?.unwrap_or(0);
    if let Some(extra) = tokens.next() {
        return Err(VersionParserError::TrailingInput(extra.to_string()));
    }

    let (release_tag, release_number) = match release {
        None => (ReleaseTag::Release, 0),
        Some(segment) => {
            let mut parts = segment.split('.');
            let tag_token = parts.next().unwrap_or("");
            let release_tag = tag_token
                .parse::<ReleaseTag>()
                .map_err(|_| VersionParserError::InvalidField {
                    field: Field::ReleaseTag,
                    token: tag_token.to_string(),
                })?;
            let release_number = parts.next().map(parse_release_number).transpose()?.unwrap_or(0);
            if let Some(extra) = parts.next() {
                return Err(VersionParserError::TrailingInput(extra.to_string()));
            }
            (release_tag, release_number)
        }
    };

    Ok(Version::new(major, minor, patch, release_tag, release_number))
}

fn parse_number(field: Field, token: &str) -> Result<u32, VersionParserError> {
    if !DIGITS_RE.is_match(token) {
        return Err(VersionParserError::InvalidField {
            field,
            token: token.to_string(),
        });
    }
    token.parse::<u32>().map_err(|_| VersionParserError::OutOfRange {
        field,
        token: token.to_string(),
    })
}

/// Release numbers above the maximum reset to 0 instead of failing.
fn parse_release_number(token: &str) -> Result<u32, VersionParserError> {
    if !DIGITS_RE.is_match(token) {
        return Err(VersionParserError::InvalidField {
            field: Field::ReleaseNumber,
            token: token.to_string(),
        });
    }
    Ok(clamp_release_number(token))
}

fn clamp_release_number(token: &str) -> u32 {
    match token.parse::<u32>() {
        Ok(n) if n <= MAX_RELEASE_NUMBER => n,
        _ => {
            debug!("Release number {} exceeds {}, resetting to 0", token, MAX_RELEASE_NUMBER);
            0
        }
    }
}

fn parse_lenient(version: &str) -> Version {
    let version = version.trim();
    let (numeric, release, _) = split_segments(version);

    let mut tokens = numeric.split('.');
    let major = lenient_number(tokens.next());
    let minor = lenient_number(tokens.next());
    let patch = lenient_number(tokens.next());

    let mut parts = release.unwrap_or("").split('.');
    let release_tag = parts
        .next()
        .and_then(|t| t.parse::<ReleaseTag>().ok())
        .unwrap_or(ReleaseTag::Release);
    let release_number = match parts.next() {
        Some(t) if DIGITS_RE.is_match(t) => clamp_release_number(t),
        _ => 0,
    };

    Version::new(major, minor, patch, release_tag, release_number)
}

/// Overflowing digits saturate, anything else is 0
fn lenient_number(token: Option<&str>) -> u32 {
    match token {
        Some(t) if DIGITS_RE.is_match(t) => t.parse::<u32>().unwrap_or(u32::MAX),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(field: Field, token: &str) -> VersionParserError {
        VersionParserError::InvalidField {
            field,
            token: token.to_string(),
        }
    }

    #[test]
    fn test_parse_full() {
        let v = parse_version("2.12.10-beta.3").unwrap();
        assert_eq!(v.major(), 2);
        assert_eq!(v.minor(), 12);
        assert_eq!(v.patch(), 10);
        assert_eq!(v.release_tag(), ReleaseTag::Beta);
        assert_eq!(v.release_number(), 3);
    }

    #[test]
    fn test_parse_versions() {
        let cases = [
            ("1.2.3", Version::release(1, 2, 3)),
            ("1.2.3-beta.2", Version::new(1, 2, 3, ReleaseTag::Beta, 2)),
            ("2.12.10-betha.3", Version::new(2, 12, 10, ReleaseTag::Beta, 3)),
            ("1.12.0-alpha", Version::new(1, 12, 0, ReleaseTag::Alpha, 0)),
            ("2.1-alpha", Version::new(2, 1, 0, ReleaseTag::Alpha, 0)),
            ("2.1-nightly+20200101", Version::new(2, 1, 0, ReleaseTag::Nightly, 0)),
            ("3.0.0-rc.1+build.7", Version::new(3, 0, 0, ReleaseTag::ReleaseCandidate, 1)),
            ("1", Version::release(1, 0, 0)),
            ("1.5", Version::release(1, 5, 0)),
            ("  1.0.0  ", Version::release(1, 0, 0)),
            ("0.0.0", Version::release(0, 0, 0)),
            ("4294967295.0.0", Version::release(u32::MAX, 0, 0)),
            ("007.01.0", Version::release(7, 1, 0)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_version(input), Ok(expected), "parsing {:?}", input);
        }
    }

    #[test]
    fn test_parse_fails() {
        assert_eq!(parse_version("1.a.3-beta.2"), Err(invalid(Field::Minor, "a")));
        assert_eq!(parse_version("1.1.3-x.2"), Err(invalid(Field::ReleaseTag, "x")));
        assert_eq!(parse_version(""), Err(invalid(Field::Major, "")));
        assert_eq!(parse_version("v1.2.3"), Err(invalid(Field::Major, "v1")));
        assert_eq!(parse_version("1..3"), Err(invalid(Field::Minor, "")));
        assert_eq!(parse_version("1.2.x"), Err(invalid(Field::Patch, "x")));
        assert_eq!(parse_version("1.2.3-"), Err(invalid(Field::ReleaseTag, "")));
        assert_eq!(parse_version("1.2.3-rc.x"), Err(invalid(Field::ReleaseNumber, "x")));
        assert_eq!(parse_version("1.2.-3"), Err(invalid(Field::Patch, "")));
        assert_eq!(
            parse_version("1.2.3.4"),
            Err(VersionParserError::TrailingInput("4".to_string()))
        );
        assert_eq!(
            parse_version("1.2.3-rc.1.2"),
            Err(VersionParserError::TrailingInput("2".to_string()))
        );
        assert_eq!(
            parse_version("1.2.3+"),
            Err(VersionParserError::InvalidBuildMetadata(String::new()))
        );
        assert_eq!(
            parse_version("1.2.3+a b"),
            Err(VersionParserError::InvalidBuildMetadata("a b".to_string()))
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse_version("4294967296.0.0").unwrap_err();
        assert_eq!(
            err,
            VersionParserError::OutOfRange {
                field: Field::Major,
                token: "4294967296".to_string()
            }
        );
        assert_eq!(err.field(), Some(Field::Major));
    }

    #[test]
    fn test_release_number_clamp() {
        assert_eq!(parse_version("1.0.0-alpha.99").unwrap().release_number(), 99);
        assert_eq!(parse_version("1.0.0-alpha.100").unwrap().release_number(), 0);
        assert_eq!(
            parse_version("1.0.0-alpha.99999999999999999999").unwrap().release_number(),
            0
        );
    }

    #[test]
    fn test_error_field_and_message() {
        let err = parse_version("1.a.3-beta.2").unwrap_err();
        assert_eq!(err.field(), Some(Field::Minor));
        assert_eq!(err.field().map(|f| f.as_str()), Some("minor"));
        assert_eq!(err.to_string(), "Invalid minor \"a\"");
        assert_eq!(VersionParserError::TrailingInput("4".to_string()).field(), None);
    }

    #[test]
    fn test_parse_lenient() {
        let cases = [
            ("2.12.10-beta.3", Version::new(2, 12, 10, ReleaseTag::Beta, 3)),
            ("1.a.3-beta.2", Version::new(1, 0, 3, ReleaseTag::Beta, 2)),
            ("1.1.3-x.2", Version::release(1, 1, 3)),
            ("", Version::release(0, 0, 0)),
            ("garbage", Version::release(0, 0, 0)),
            ("1", Version::release(1, 0, 0)),
            ("1.2.3.4", Version::release(1, 2, 3)),
            ("99999999999.1.1", Version::release(u32::MAX, 1, 1)),
            ("1.0.0-rc.500", Version::new(1, 0, 0, ReleaseTag::ReleaseCandidate, 0)),
            ("1.0.0-rc.x", Version::new(1, 0, 0, ReleaseTag::ReleaseCandidate, 0)),
            ("2.1-nightly+20200101", Version::new(2, 1, 0, ReleaseTag::Nightly, 0)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_version_lenient(input), expected, "parsing {:?}", input);
        }
    }

    #[test]
    fn test_parser_policy() {
        let strict = VersionParser::new();
        let lenient = VersionParser::with_policy(ParsePolicy::Lenient);

        assert_eq!(strict.policy(), ParsePolicy::Strict);
        assert_eq!(VersionParser::default().policy(), ParsePolicy::Strict);
        assert!(!strict.is_valid("1.x"));
        assert!(lenient.is_valid("1.x"));
        assert_eq!(lenient.parse("1.x").unwrap(), Version::release(1, 0, 0));
    }

    #[test]
    fn test_is_valid() {
        let parser = VersionParser::new();
        assert!(parser.is_valid("1.0.0"));
        assert!(parser.is_valid("1.0.0-nightly"));
        assert!(parser.is_valid("1.0.0-RC.2"));
        assert!(!parser.is_valid("1.0.0-dev"));
        assert!(!parser.is_valid("1.0.0 beta"));
    }
}
