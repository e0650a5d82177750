use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use relver_semver::{Version, VersionParser};

use crate::config::{effective_policy, RelverConfig};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version string to parse (e.g. 2.12.10-beta.3)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Default malformed fields to 0 instead of failing
    #[arg(long, conflicts_with = "strict")]
    pub lenient: bool,

    /// Reject malformed fields, even if relver.toml asks for lenient parsing
    #[arg(long)]
    pub strict: bool,

    /// Print the parsed fields as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parsed fields as printed by `relver parse`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VersionFields {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release_tag: String,
    pub release_number: u32,
    pub canonical: String,
}

impl From<&Version> for VersionFields {
    fn from(version: &Version) -> Self {
        let release_tag = if version.is_prerelease() {
            version.release_tag().as_str().to_string()
        } else {
            "release".to_string()
        };

        VersionFields {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            release_tag,
            release_number: version.release_number(),
            canonical: version.to_string(),
        }
    }
}

pub fn execute(args: ParseArgs, config: Option<&RelverConfig>) -> Result<i32> {
    let parser = VersionParser::with_policy(effective_policy(args.lenient, args.strict, config));
    let version = parser
        .parse(&args.version)
        .with_context(|| format!("Could not parse version \"{}\"", args.version))?;
    let fields = VersionFields::from(&version);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(0);
    }

    println!("major:          {}", fields.major);
    println!("minor:          {}", fields.minor);
    println!("patch:          {}", fields.patch);
    println!("release tag:    {}", fields.release_tag);
    println!("release number: {}", fields.release_number);
    println!("canonical:      {}", fields.canonical);

    Ok(0)
}
