use anyhow::Result;
use clap::Args;

use relver_semver::Semver;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort; unparsable entries are skipped with a warning
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Newest first
    #[arg(short, long)]
    pub reverse: bool,
}

/// Sorted versions, one per line, and the exit code (1 if any entry was skipped)
pub fn sort_output(args: &SortArgs) -> (String, i32) {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();

    let sorted = if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };

    let code = if sorted.len() == versions.len() { 0 } else { 1 };
    (sorted.join("\n"), code)
}

pub fn execute(args: SortArgs) -> Result<i32> {
    let (output, code) = sort_output(&args);
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(code)
}
