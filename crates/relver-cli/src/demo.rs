use anyhow::{Context, Result};
use clap::Args;

use relver_semver::{format_version, parse_version, Comparator, LowZeros, ReleaseTag, Version};

use crate::compare::describe;

#[derive(Args, Debug)]
pub struct DemoArgs {}

const COMPARISONS: [(&str, &str); 6] = [
    ("1.12.0", "1.12.0"),
    ("1.20.0", "1.12.0"),
    ("1.12.0", "1.12.0-alpha"),
    ("1.12.0-alpha.3", "1.12.0-alpha.4"),
    ("1.2.0", "2.1.0"),
    ("2.0.0-alpha", "1.9.9"),
];

pub fn execute(_args: DemoArgs) -> Result<i32> {
    println!("Format version object to string");
    let alpha = Version::new(1, 0, 0, ReleaseTag::Alpha, 0);
    println!("  {:?} -> {}", alpha, alpha);
    let release = Version::release(1, 3, 0);
    println!("  {} with low zeros hidden -> {}", release, format_version(&release, LowZeros::Hide));
    println!();

    println!("Parse version string to object");
    let mut version = Version::default();
    println!("  Version before parsing: {}", version);
    let raw = "2.12.10-betha.3";
    version = parse_version(raw).with_context(|| format!("Could not parse version \"{}\"", raw))?;
    println!("  Raw version string: {}", raw);
    println!("  Parsed version: {} (for example: minor = {})", version, version.minor());
    match parse_version("1.a.3-beta.2") {
        Ok(v) => println!("  Unexpectedly parsed 1.a.3-beta.2 as {}", v),
        Err(e) => println!("  1.a.3-beta.2 is rejected: {}", e),
    }
    println!();

    println!("Compare versions");
    for (a, b) in COMPARISONS {
        let a = parse_version(a).with_context(|| format!("Could not parse version \"{}\"", a))?;
        let b = parse_version(b).with_context(|| format!("Could not parse version \"{}\"", b))?;
        println!(
            "  {:<32} (>= {}, <= {})",
            describe(&a, &b),
            Comparator::greater_than_or_equal_to(&a, &b),
            Comparator::less_than_or_equal_to(&a, &b)
        );
    }

    Ok(0)
}
