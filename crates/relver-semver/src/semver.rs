//! Semver facade providing operations over lists of version strings

use log::warn;

use crate::version::Version;
use crate::version_parser::parse_version;

/// Facade for operations on many version strings at once
pub struct Semver;

impl Semver {
    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// Newest of the parsable versions
    pub fn max(versions: &[&str]) -> Option<String> {
        Self::parse_all(versions)
            .into_iter()
            // max_by_key returns the last maximum, keep the first instead
            .rev()
            .max_by_key(|(version, _)| *version)
            .map(|(_, i)| versions[i].to_string())
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed = Self::parse_all(versions);

        // Stable sort keeps equal versions in input order
        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    /// Parse every entry, keeping its original index and dropping failures
    fn parse_all(versions: &[&str]) -> Vec<(Version, usize)> {
        versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parse_version(v) {
                Ok(version) => Some((version, i)),
                Err(e) => {
                    warn!("Skipping version \"{}\": {}", v, e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.1", "0.1", "1.0", "2.4.0-alpha", "2.4.0", "3.2.1"]);

        let versions2 = vec!["1.0.0", "1.0.0-rc.2", "1.0.0-nightly", "1.0.0-beta", "1.0.0-rc.10", "0.9.9"];
        let sorted2 = Semver::sort(&versions2);
        assert_eq!(
            sorted2,
            vec!["0.9.9", "1.0.0-nightly", "1.0.0-beta", "1.0.0-rc.2", "1.0.0-rc.10", "1.0.0"]
        );
    }

    #[test]
    fn test_sort_is_stable_and_skips_invalid() {
        let versions = vec!["1.0.0", "junk", "1", "1.0", "0.5"];
        let sorted = Semver::sort(&versions);
        assert_eq!(sorted, vec!["0.5", "1.0.0", "1", "1.0"]);
    }

    #[test]
    fn test_rsort() {
        let versions = vec!["1.0", "0.1", "0.1", "3.2.1", "2.4.0-alpha", "2.4.0"];
        let rsorted = Semver::rsort(&versions);
        assert_eq!(rsorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0", "0.1", "0.1"]);
    }

    #[test]
    fn test_max() {
        assert_eq!(Semver::max(&["1.2.0", "2.1.0", "2.1.0-rc.1"]), Some("2.1.0".to_string()));
        assert_eq!(Semver::max(&["2.0", "2.0.0", "1.9"]), Some("2.0".to_string()));
        assert_eq!(Semver::max(&["junk"]), None);
        assert_eq!(Semver::max(&[]), None);
    }
}
