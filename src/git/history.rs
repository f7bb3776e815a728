use chrono::{DateTime, FixedOffset};

use crate::error::StaleError;

use super::GitRunner;

/// Author timestamp of the most recent commit touching `path` within the
/// current revision's ancestry. `%aI` yields strict ISO 8601, which chrono
/// parses exactly; an empty answer means git could not resolve the path's
/// history and is fatal.
pub(crate) fn last_change_time(
    git: &dyn GitRunner,
    path: &str,
) -> Result<DateTime<FixedOffset>, StaleError> {
    let out = git
        .run_git(&["log", "-1", "--format=%aI", "--", path])
        .map_err(|source| StaleError::GitSpawn { source })?;
    if !out.status.success() {
        return Err(StaleError::GitCommand {
            context: "log",
            status: out.status,
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }
    let raw = String::from_utf8_lossy(&out.stdout);
    let value = raw.trim();
    if value.is_empty() {
        return Err(StaleError::EmptyHistory {
            path: path.to_string(),
        });
    }
    DateTime::parse_from_rfc3339(value).map_err(|source| StaleError::TimestampParse {
        path: path.to_string(),
        value: value.to_string(),
        source,
    })
}
