use crate::error::StaleError;
use crate::report::GroupedReport;

/// # Errors
/// Returns an error when serialization fails.
pub fn to_json(grouped: &GroupedReport) -> Result<String, StaleError> {
    serde_json::to_string(grouped).map_err(|source| StaleError::Json { source })
}
