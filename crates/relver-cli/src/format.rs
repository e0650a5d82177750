use anyhow::Result;
use clap::Args;
use log::warn;

use relver_semver::{ReleaseTag, Version, VersionFormatter, MAX_RELEASE_NUMBER};

use crate::config::{effective_low_zeros, RelverConfig};

#[derive(Args, Debug)]
pub struct FormatArgs {
    pub major: u32,

    #[arg(default_value = "0")]
    pub minor: u32,

    #[arg(default_value = "0")]
    pub patch: u32,

    /// Pre-release tag (nightly, alpha, beta, rc)
    #[arg(short, long)]
    pub tag: Option<ReleaseTag>,

    /// Pre-release sequence number (0-99, 0 means none)
    #[arg(short, long, default_value = "0")]
    pub number: u32,

    /// Drop trailing zero fields of a release (1.0.0 -> 1)
    #[arg(long, conflicts_with = "show_low_zeros")]
    pub hide_low_zeros: bool,

    /// Always print major.minor.patch, even if relver.toml hides low zeros
    #[arg(long)]
    pub show_low_zeros: bool,
}

/// Formatted version as printed by `relver format`
pub fn format_output(args: &FormatArgs, config: Option<&RelverConfig>) -> String {
    let release_tag = args.tag.unwrap_or(ReleaseTag::Release);

    if args.number > MAX_RELEASE_NUMBER {
        warn!("Release number {} exceeds {} and is dropped", args.number, MAX_RELEASE_NUMBER);
    } else if args.number > 0 && !release_tag.is_prerelease() {
        warn!("Release number {} is ignored without a pre-release tag", args.number);
    }

    let version = Version::new(args.major, args.minor, args.patch, release_tag, args.number);
    let formatter = VersionFormatter::new(effective_low_zeros(args.hide_low_zeros, args.show_low_zeros, config));

    formatter.format(&version)
}

pub fn execute(args: FormatArgs, config: Option<&RelverConfig>) -> Result<i32> {
    println!("{}", format_output(&args, config));
    Ok(0)
}
