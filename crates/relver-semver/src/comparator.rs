//! Version comparison utilities

use std::cmp::Ordering;

use thiserror::Error;

use crate::operator::{InvalidOperatorError, Operator};
use crate::version::Version;
use crate::version_parser::{parse_version, VersionParserError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparatorError {
    #[error(transparent)]
    Operator(#[from] InvalidOperatorError),
    #[error(transparent)]
    Version(#[from] VersionParserError),
}

/// Comparator for versions.
///
/// Every predicate derives from [`Comparator::compare`].
pub struct Comparator;

impl Comparator {
    /// Three-way comparison.
    ///
    /// Fields are compared most significant first: major, minor, patch,
    /// release tag rank, release number. The first field that differs
    /// decides the result.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| a.release_tag().rank().cmp(&b.release_tag().rank()))
            .then_with(|| a.release_number().cmp(&b.release_number()))
    }

    /// Check if a > b
    pub fn greater_than(a: &Version, b: &Version) -> bool {
        Self::satisfies(a, Operator::GreaterThan, b)
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::satisfies(a, Operator::GreaterThanOrEqual, b)
    }

    /// Check if a < b
    pub fn less_than(a: &Version, b: &Version) -> bool {
        Self::satisfies(a, Operator::LessThan, b)
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::satisfies(a, Operator::LessThanOrEqual, b)
    }

    /// Check if a == b
    pub fn equal_to(a: &Version, b: &Version) -> bool {
        Self::satisfies(a, Operator::Equal, b)
    }

    /// Check if a != b
    pub fn not_equal_to(a: &Version, b: &Version) -> bool {
        Self::satisfies(a, Operator::NotEqual, b)
    }

    /// Compare a to b using the given operator
    pub fn satisfies(a: &Version, operator: Operator, b: &Version) -> bool {
        operator.matches(Self::compare(a, b))
    }

    /// Parse both version strings and the operator, then compare
    pub fn compare_str(version1: &str, operator: &str, version2: &str) -> Result<bool, ComparatorError> {
        let operator: Operator = operator.parse()?;
        let a = parse_version(version1)?;
        let b = parse_version(version2)?;
        Ok(Self::satisfies(&a, operator, &b))
    }
}

/// Three-way comparison of two versions
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    Comparator::compare(a, b)
}
