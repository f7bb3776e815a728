use crate::error::StaleError;

use super::GitRunner;

/// List every path tracked at the current revision, repository-relative.
pub(crate) fn list_tracked_paths(git: &dyn GitRunner) -> Result<Vec<String>, StaleError> {
    let out = git
        .run_git(&["ls-tree", "-r", "--name-only", "HEAD"])
        .map_err(|source| StaleError::GitSpawn { source })?;
    if !out.status.success() {
        return Err(StaleError::GitCommand {
            context: "ls-tree",
            status: out.status,
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }
    let text = String::from_utf8_lossy(&out.stdout);
    Ok(text
        .lines()
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}
