use chrono::Duration;

use crate::error::StaleError;
use crate::git::{GitRunner, last_change_time, list_tracked_paths};
use crate::system::Clock;
use crate::types::{Options, TrackedFile};

/// Walk the tracked-file listing and keep everything strictly older than
/// the configured threshold.
///
/// `now` is captured once here for filtering; display ages are recomputed
/// later from a fresh reading.
///
/// # Errors
/// Returns an error when git cannot be launched, when the listing query
/// fails, or when any per-file history query returns nothing usable. There
/// is no partial report: the first failure aborts the run.
pub fn collect_stale_files(
    opts: &Options,
    git: &dyn GitRunner,
    clock: &dyn Clock,
) -> Result<Vec<TrackedFile>, StaleError> {
    let now = clock.now();
    let past = now - Duration::days(opts.min_age_days);

    let paths = list_tracked_paths(git)?;
    if opts.debug {
        eprintln!(
            "[debug] tracked={} min_age_days={} cutoff={}",
            paths.len(),
            opts.min_age_days,
            past.to_rfc3339()
        );
    }

    let mut stale = Vec::new();
    for path in paths {
        if path.starts_with(".git") || opts.ignore.contains(&path) {
            continue;
        }
        let last_modified = last_change_time(git, &path)?;
        if last_modified < past {
            if opts.debug {
                eprintln!("[debug] stale: {path} ({})", last_modified.to_rfc3339());
            }
            stale.push(TrackedFile {
                path,
                last_modified,
            });
        }
    }
    Ok(stale)
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    use chrono::{DateTime, Local};

    use super::collect_stale_files;
    use crate::error::StaleError;
    use crate::git::GitRunner;
    use crate::options::build_options;
    use crate::system::Clock;
    use crate::types::Options;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    struct FakeGit {
        listing: &'static str,
        times: Vec<(&'static str, &'static str)>,
    }

    impl GitRunner for FakeGit {
        fn run_git(&self, args: &[&str]) -> std::io::Result<Output> {
            let stdout = match args.first() {
                Some(&"ls-tree") => self.listing.to_string(),
                Some(&"log") => {
                    let path = args.last().copied().unwrap_or_default();
                    self.times
                        .iter()
                        .find(|(p, _)| *p == path)
                        .map_or_else(String::new, |(_, t)| format!("{t}\n"))
                }
                _ => String::new(),
            };
            Ok(Output {
                status: ExitStatus::from_raw(0),
                stdout: stdout.into_bytes(),
                stderr: Vec::new(),
            })
        }
    }

    fn at(rfc: &str) -> DateTime<Local> {
        DateTime::parse_from_rfc3339(rfc)
            .expect("fixed time")
            .with_timezone(&Local)
    }

    fn opts_with_days(days: i64) -> Options {
        let mut opts = build_options(None, None, None, false).expect("options");
        opts.min_age_days = days;
        opts
    }

    #[test]
    fn age_threshold_is_strict() {
        let git = FakeGit {
            listing: "a.txt\nb.txt\nboundary.txt\n",
            times: vec![
                ("a.txt", "2026-06-27T12:00:00+00:00"),
                ("b.txt", "2026-07-27T12:00:00+00:00"),
                // exactly 30 days before "now": not stale
                ("boundary.txt", "2026-07-07T12:00:00+00:00"),
            ],
        };
        let clock = FixedClock(at("2026-08-06T12:00:00+00:00"));

        let stale = collect_stale_files(&opts_with_days(30), &git, &clock).expect("stale");
        let paths: Vec<&str> = stale.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt"]);
    }

    #[test]
    fn ignore_list_matches_exact_paths_only() {
        let git = FakeGit {
            listing: "LICENSE\ndocs/LICENSE\n",
            times: vec![
                ("LICENSE", "2026-05-08T12:00:00+00:00"),
                ("docs/LICENSE", "2026-05-08T12:00:00+00:00"),
            ],
        };
        let clock = FixedClock(at("2026-08-06T12:00:00+00:00"));

        let stale = collect_stale_files(&opts_with_days(30), &git, &clock).expect("stale");
        let paths: Vec<&str> = stale.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["docs/LICENSE"]);
    }

    #[test]
    fn git_metadata_paths_are_always_skipped() {
        // neither path has a history entry, so any lookup would abort
        let git = FakeGit {
            listing: ".gitignore\n.github/workflows/ci.yml\n",
            times: Vec::new(),
        };
        let clock = FixedClock(at("2026-08-06T12:00:00+00:00"));

        let stale = collect_stale_files(&opts_with_days(0), &git, &clock).expect("stale");
        assert!(stale.is_empty());
    }

    #[test]
    fn missing_history_aborts_the_run() {
        let git = FakeGit {
            listing: "a.txt\nghost.txt\n",
            times: vec![("a.txt", "2026-06-27T12:00:00+00:00")],
        };
        let clock = FixedClock(at("2026-08-06T12:00:00+00:00"));

        let err = collect_stale_files(&opts_with_days(30), &git, &clock).expect_err("must fail");
        assert!(matches!(err, StaleError::EmptyHistory { .. }));
    }
}
