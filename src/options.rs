use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StaleError;
use crate::types::{Options, OutputFormat};

/// Files skipped regardless of age. Policy/metadata files that are expected
/// to go untouched for long stretches.
pub(crate) const DEFAULT_IGNORE: [&str; 5] = [
    "sonar-project.properties",
    "repolinter.json",
    "release_files.json",
    "license_policy.yml",
    "LICENSE",
];

pub(crate) const DEFAULT_MIN_AGE_DAYS: i64 = 30;

/// Classify the raw `-o` value by its first letter: `j` is json, `c` is
/// csv, `y` is yaml, anything else is raw. Matching is case-sensitive, so
/// "yes" selects yaml and "JSON" falls back to raw.
#[must_use]
pub fn classify_format(value: &str) -> OutputFormat {
    match value.as_bytes().first() {
        Some(b'j') => OutputFormat::Json,
        Some(b'c') => OutputFormat::Csv,
        Some(b'y') => OutputFormat::Yaml,
        _ => OutputFormat::Raw,
    }
}

/// Permissive integer parsing for `-d`: leading whitespace and an optional
/// sign are accepted, the digit run is parsed, trailing garbage is ignored,
/// and fully non-numeric input yields 0.
#[must_use]
pub fn parse_days(value: &str) -> i64 {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let parsed = rest[..end].parse::<i64>().unwrap_or(0);
    if negative { -parsed } else { parsed }
}

/// Read a newline-separated ignore file into a list of trimmed entries.
/// The path is resolved against the current directory before the existence
/// check.
///
/// # Errors
/// Returns an error when the file does not exist or cannot be read.
pub fn load_ignore_file(path: &Path) -> Result<Vec<String>, StaleError> {
    let full = absolute_path(path);
    if !full.exists() {
        return Err(StaleError::IgnoreFileMissing {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(&full).map_err(|source| StaleError::IgnoreFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .trim()
        .lines()
        .map(|line| line.trim().to_string())
        .collect())
}

/// Build the immutable run configuration from the raw flag values.
///
/// # Errors
/// Returns an error when the `-i` ignore file does not exist or cannot be
/// read.
pub fn build_options(
    output: Option<&str>,
    days: Option<&str>,
    ignore_file: Option<&Path>,
    debug: bool,
) -> Result<Options, StaleError> {
    let mut ignore: Vec<String> = DEFAULT_IGNORE.iter().map(ToString::to_string).collect();
    if let Some(path) = ignore_file {
        ignore.extend(load_ignore_file(path)?);
    }
    Ok(Options {
        output: output.map_or(OutputFormat::Raw, classify_format),
        min_age_days: days.map_or(DEFAULT_MIN_AGE_DAYS, parse_days),
        ignore,
        debug,
    })
}

fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    }
}
