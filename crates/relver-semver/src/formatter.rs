//! Version formatting

use crate::version::Version;

/// Whether zero minor/patch fields are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LowZeros {
    /// Always write `major.minor.patch`
    #[default]
    Show,
    /// Drop trailing zero fields of a release, `1.0.0` becomes `1`
    Hide,
}

impl LowZeros {
    pub fn from_hide_flag(hide: bool) -> Self {
        if hide {
            LowZeros::Hide
        } else {
            LowZeros::Show
        }
    }
}

/// Formatter carrying a low-zeros policy
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionFormatter {
    low_zeros: LowZeros,
}

impl VersionFormatter {
    pub fn new(low_zeros: LowZeros) -> Self {
        VersionFormatter { low_zeros }
    }

    pub fn low_zeros(&self) -> LowZeros {
        self.low_zeros
    }

    pub fn format(&self, version: &Version) -> String {
        format_version(version, self.low_zeros)
    }
}

/// Format a version into its canonical string form.
///
/// A pre-release always keeps all three numeric fields, so `Hide` only
/// affects finished releases.
pub fn format_version(version: &Version, low_zeros: LowZeros) -> String {
    let mut result = String::with_capacity(16);
    let hide = low_zeros == LowZeros::Hide && !version.is_prerelease();

    let show_patch = !hide || version.patch() > 0;
    let show_minor = show_patch || version.minor() > 0;

    result.push_str(&version.major().to_string());
    if show_minor {
        result.push('.');
        result.push_str(&version.minor().to_string());
    }
    if show_patch {
        result.push('.');
        result.push_str(&version.patch().to_string());
    }

    if version.is_prerelease() {
        result.push('-');
        result.push_str(version.release_tag().as_str());
        if version.release_number() > 0 {
            result.push('.');
            result.push_str(&version.release_number().to_string());
        }
    }

    result
}
