use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum StaleError {
    IgnoreFileMissing {
        path: PathBuf,
    },
    IgnoreFileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    GitSpawn {
        source: std::io::Error,
    },
    GitCommand {
        context: &'static str,
        status: ExitStatus,
        stderr: String,
    },
    EmptyHistory {
        path: String,
    },
    TimestampParse {
        path: String,
        value: String,
        source: chrono::ParseError,
    },
    Csv {
        source: csv::Error,
    },
    Json {
        source: serde_json::Error,
    },
    Yaml {
        source: serde_yaml::Error,
    },
}

impl std::fmt::Display for StaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IgnoreFileMissing { path } => {
                write!(f, "ignore file {} doesn't exist", path.display())
            }
            Self::IgnoreFileRead { path, source } => {
                write!(f, "failed to read ignore file {}: {source}", path.display())
            }
            Self::GitSpawn { source } => write!(f, "failed to launch git: {source}"),
            Self::GitCommand {
                context,
                status,
                stderr,
            } => {
                if stderr.is_empty() {
                    write!(f, "git {context} failed with status {status}")
                } else {
                    write!(f, "git {context} failed with status {status}: {stderr}")
                }
            }
            Self::EmptyHistory { path } => write!(f, "no commit history for {path}"),
            Self::TimestampParse {
                path,
                value,
                source,
            } => {
                write!(f, "failed to parse timestamp '{value}' for {path}: {source}")
            }
            Self::Csv { source } => write!(f, "failed to render csv output: {source}"),
            Self::Json { source } => write!(f, "failed to render json output: {source}"),
            Self::Yaml { source } => write!(f, "failed to render yaml output: {source}"),
        }
    }
}

impl std::error::Error for StaleError {}
