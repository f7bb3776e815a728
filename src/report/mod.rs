mod collector;
mod rows;

pub use collector::collect_stale_files;
pub use rows::{GroupedReport, build_rows, sort_stale_files};
