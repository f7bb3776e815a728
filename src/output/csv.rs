use csv::Writer;

use crate::error::StaleError;
use crate::types::ReportRow;

/// Header plus one record per stale file, with the crate's standard
/// quoting rules.
///
/// # Errors
/// Returns an error when record writing fails.
pub fn to_csv(rows: &[ReportRow]) -> Result<String, StaleError> {
    let mut buf = Vec::new();
    {
        let mut wtr = Writer::from_writer(&mut buf);
        wtr.write_record(["Age", "Last modified", "File Path"])
            .map_err(|source| StaleError::Csv { source })?;
        for row in rows {
            wtr.write_record([row.age.as_str(), row.date.as_str(), row.path.as_str()])
                .map_err(|source| StaleError::Csv { source })?;
        }
        wtr.flush()
            .map_err(|source| StaleError::Csv { source: source.into() })?;
    }
    Ok(String::from_utf8_lossy(&buf).trim_end().to_string())
}
