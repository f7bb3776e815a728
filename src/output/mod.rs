mod csv;
mod json;
mod raw;
mod yaml;

pub use self::csv::to_csv;
pub use self::json::to_json;
pub use self::raw::to_raw;
pub use self::yaml::to_yaml;

use crate::error::StaleError;
use crate::report::GroupedReport;
use crate::types::{OutputFormat, ReportRow};

/// Render the sorted rows in the requested format. json and yaml render
/// the date-grouped mapping; raw and csv render one record per row.
///
/// # Errors
/// Returns an error when the underlying serializer fails.
pub fn render(format: OutputFormat, rows: &[ReportRow]) -> Result<String, StaleError> {
    match format {
        OutputFormat::Raw => Ok(to_raw(rows)),
        OutputFormat::Csv => to_csv(rows),
        OutputFormat::Json => to_json(&GroupedReport::from_rows(rows)),
        OutputFormat::Yaml => to_yaml(&GroupedReport::from_rows(rows)),
    }
}
