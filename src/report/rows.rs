use std::cmp::Reverse;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::system::Clock;
use crate::types::{ReportRow, TrackedFile};

const SECS_PER_DAY: f64 = 86_400.0;

/// Presentation order: newest stale file first, oldest last. The sort is
/// stable, so equal timestamps keep their listing order and re-sorting an
/// already sorted set is a no-op.
#[must_use]
pub fn sort_stale_files(mut files: Vec<TrackedFile>) -> Vec<TrackedFile> {
    files.sort_by_key(|file| Reverse(file.last_modified));
    files
}

/// Project the sorted stale set into display rows. The age in days is
/// computed from a fresh clock reading, independent of the capture used
/// for filtering.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn build_rows(files: &[TrackedFile], clock: &dyn Clock) -> Vec<ReportRow> {
    let now = clock.now();
    files
        .iter()
        .map(|file| {
            let secs = now.signed_duration_since(file.last_modified).num_seconds();
            let days = (secs as f64 / SECS_PER_DAY).round() as i64;
            ReportRow {
                age: format!("{days} days"),
                date: file.last_modified.format("%Y-%m-%d").to_string(),
                path: file.path.clone(),
            }
        })
        .collect()
}

/// Stale paths grouped by last-modified date, in first-seen date order
/// with encounter order inside each group. Serializes as a mapping that
/// preserves that order, for the json and yaml renderers.
#[derive(Debug, Default)]
pub struct GroupedReport {
    groups: Vec<(String, Vec<String>)>,
}

impl GroupedReport {
    #[must_use]
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for row in rows {
            match groups.iter_mut().find(|group| group.0 == row.date) {
                Some(group) => group.1.push(row.path.clone()),
                None => groups.push((row.date.clone(), vec![row.path.clone()])),
            }
        }
        Self { groups }
    }
}

impl Serialize for GroupedReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (date, paths) in &self.groups {
            map.serialize_entry(date, paths)?;
        }
        map.end()
    }
}
