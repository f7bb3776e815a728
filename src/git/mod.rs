mod history;
mod runner;
mod tracked;

pub use runner::{DefaultGitRunner, GitRunner};

pub(crate) use history::last_change_time;
pub(crate) use tracked::list_tracked_paths;
