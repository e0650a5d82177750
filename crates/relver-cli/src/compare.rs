use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use relver_semver::{compare_versions, Comparator, Operator, Version, VersionParser};

use crate::config::{effective_policy, RelverConfig};

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[arg(value_name = "A")]
    pub a: String,

    #[arg(value_name = "B")]
    pub b: String,

    /// Check "A OP B" instead of printing the relation; exits 1 when false
    #[arg(long, value_name = "OP", allow_hyphen_values = true)]
    pub op: Option<Operator>,

    /// Default malformed fields to 0 instead of failing
    #[arg(long, conflicts_with = "strict")]
    pub lenient: bool,

    /// Reject malformed fields, even if relver.toml asks for lenient parsing
    #[arg(long)]
    pub strict: bool,
}

/// Symbol for a three-way comparison result
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Render "a SYMBOL b" with a colored relation
pub fn describe(a: &Version, b: &Version) -> String {
    let ordering = compare_versions(a, b);
    let symbol = match ordering {
        Ordering::Less => ordering_symbol(ordering).yellow(),
        Ordering::Equal => ordering_symbol(ordering).cyan(),
        Ordering::Greater => ordering_symbol(ordering).green(),
    };
    format!("{} {} {}", a, symbol.bold(), b)
}

/// Output line and exit code of `relver compare`
pub fn compare_output(args: &CompareArgs, config: Option<&RelverConfig>) -> Result<(String, i32)> {
    let parser = VersionParser::with_policy(effective_policy(args.lenient, args.strict, config));
    let a = parser
        .parse(&args.a)
        .with_context(|| format!("Could not parse version \"{}\"", args.a))?;
    let b = parser
        .parse(&args.b)
        .with_context(|| format!("Could not parse version \"{}\"", args.b))?;

    Ok(match args.op {
        Some(op) => {
            let holds = Comparator::satisfies(&a, op, &b);
            (holds.to_string(), if holds { 0 } else { 1 })
        }
        None => (describe(&a, &b), 0),
    })
}

pub fn execute(args: CompareArgs, config: Option<&RelverConfig>) -> Result<i32> {
    let (output, code) = compare_output(&args, config)?;
    println!("{}", output);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relver_semver::parse_version;

    #[test]
    fn test_describe() {
        colored::control::set_override(false);
        let a = parse_version("1.12.0").unwrap();
        let b = parse_version("1.12.0-alpha").unwrap();
        assert_eq!(describe(&a, &b), "1.12.0 > 1.12.0-alpha");
        assert_eq!(describe(&b, &a), "1.12.0-alpha < 1.12.0");
        assert_eq!(describe(&a, &a), "1.12.0 = 1.12.0");
    }

    fn args(a: &str, b: &str, op: Option<Operator>) -> CompareArgs {
        CompareArgs {
            a: a.to_string(),
            b: b.to_string(),
            op,
            lenient: false,
            strict: false,
        }
    }

    #[test]
    fn test_operator_exit_codes() {
        let holds = args("2.0.0", "1.9.9", Some(Operator::GreaterThanOrEqual));
        assert_eq!(compare_output(&holds, None).unwrap(), ("true".to_string(), 0));

        let fails = args("1.2.0", "2.1.0", Some(Operator::GreaterThanOrEqual));
        assert_eq!(compare_output(&fails, None).unwrap(), ("false".to_string(), 1));
    }

    #[test]
    fn test_relation_without_operator() {
        colored::control::set_override(false);
        let (output, code) = compare_output(&args("1.12.0-alpha.3", "1.12.0-alpha.4", None), None).unwrap();
        assert_eq!(output, "1.12.0-alpha.3 < 1.12.0-alpha.4");
        assert_eq!(code, 0);
    }

    #[test]
    fn test_invalid_version_is_an_error() {
        assert!(compare_output(&args("1.a.3", "1.0.0", Some(Operator::LessThan)), None).is_err());
    }

    #[test]
    fn test_lenient_from_config() {
        let config: RelverConfig = toml::from_str("[parse]\nlenient = true\n").unwrap();
        let a = args("1.a.3", "1.0.3", Some(Operator::Equal));
        assert_eq!(compare_output(&a, Some(&config)).unwrap(), ("true".to_string(), 0));

        let strict = CompareArgs { strict: true, ..a };
        assert!(compare_output(&strict, Some(&config)).is_err());
    }
}
