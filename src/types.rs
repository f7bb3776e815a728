use chrono::{DateTime, FixedOffset};

/// Output format for the stale-file report, classified from the raw
/// `-o` value by `options::classify_format`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Raw,
    Json,
    Csv,
    Yaml,
}

/// A tracked file together with the author timestamp of the most recent
/// commit that touched it.
#[derive(Debug, Clone)]
pub struct TrackedFile {
    pub path: String,
    pub last_modified: DateTime<FixedOffset>,
}

/// One display row of the report: a humanized age, the last-modified date
/// and the repository-relative path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReportRow {
    pub age: String,
    pub date: String,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub output: OutputFormat,
    pub min_age_days: i64,
    pub ignore: Vec<String>,
    pub debug: bool,
}
