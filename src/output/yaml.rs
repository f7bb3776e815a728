use crate::error::StaleError;
use crate::report::GroupedReport;

/// # Errors
/// Returns an error when serialization fails.
pub fn to_yaml(grouped: &GroupedReport) -> Result<String, StaleError> {
    serde_yaml::to_string(grouped)
        .map(|text| text.trim_end().to_string())
        .map_err(|source| StaleError::Yaml { source })
}
