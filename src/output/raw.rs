use crate::types::ReportRow;

#[must_use]
pub fn to_raw(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(|row| format!("{} {}", row.age, row.path))
        .collect::<Vec<_>>()
        .join("\n")
}
