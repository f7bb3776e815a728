#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use git_stale::{
    DefaultClock, DefaultGitRunner, StaleError, build_options, build_rows, collect_stale_files,
    output::render, sort_stale_files,
};

#[derive(Parser, Debug)]
#[command(version, about = "Report tracked files older than an age threshold.")]
struct Args {
    /// Output format (raw, json, csv, yaml), matched by first letter
    #[arg(short, long)]
    output: Option<String>,

    /// Minimum age in days (default: 30)
    #[arg(short, long)]
    days: Option<String>,

    /// Path to a file with newline-separated paths to additionally ignore
    #[arg(short, long)]
    ignore: Option<PathBuf>,

    /// Print debug info while collecting
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), StaleError> {
    let opts = build_options(
        args.output.as_deref(),
        args.days.as_deref(),
        args.ignore.as_deref(),
        args.debug,
    )?;

    eprintln!("Files older than {} days, oldest last", opts.min_age_days);

    let git = DefaultGitRunner;
    let clock = DefaultClock;
    let stale = collect_stale_files(&opts, &git, &clock)?;
    let sorted = sort_stale_files(stale);
    let rows = build_rows(&sorted, &clock);
    let out = render(opts.output, &rows)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
