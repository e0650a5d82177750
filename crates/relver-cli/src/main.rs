mod compare;
mod config;
mod demo;
mod format;
mod parse;
mod sort;

use config::RelverConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "relver")]
#[command(about = "Parse, format and compare release versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Print debug logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a version string and print its fields
    Parse(parse::ParseArgs),

    /// Build a version from its fields and print it
    Format(format::FormatArgs),

    /// Compare two versions
    Compare(compare::CompareArgs),

    /// Sort versions, oldest first
    Sort(sort::SortArgs),

    /// Walk through formatting, parsing and comparing a few versions
    Demo(demo::DemoArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Exit code for errors, kept apart from the 1 a failed `compare --op` check returns
const ERROR_EXIT_CODE: u8 = 2;

/// Run a subcommand; the config is only loaded by subcommands that read it
fn dispatch<F>(command: Commands, load_config: F) -> Result<i32>
where
    F: Fn() -> Result<Option<RelverConfig>>,
{
    match command {
        Commands::Parse(parse_args) => parse::execute(parse_args, load_config()?.as_ref()),
        Commands::Format(format_args) => format::execute(format_args, load_config()?.as_ref()),
        Commands::Compare(compare_args) => compare::execute(compare_args, load_config()?.as_ref()),
        Commands::Sort(sort_args) => sort::execute(sort_args),
        Commands::Demo(demo_args) => demo::execute(demo_args),
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    // relver.toml is looked up from the working directory
    dispatch(args.command, RelverConfig::load_from_cwd)
}

fn exit_status(result: &Result<i32>) -> u8 {
    match result {
        Ok(code) => *code as u8,
        Err(_) => ERROR_EXIT_CODE,
    }
}

fn main() -> ExitCode {
    let result = run();
    if let Err(e) = &result {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }
    }
    ExitCode::from(exit_status(&result))
}
