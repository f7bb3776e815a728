use std::process::{Command, Output, Stdio};

pub trait GitRunner {
    /// Run the `git` command in the current working directory with `args`.
    ///
    /// # Errors
    /// Returns an error if the `git` process cannot be spawned or fails
    /// during execution.
    fn run_git(&self, args: &[&str]) -> std::io::Result<Output>;
}

pub struct DefaultGitRunner;

impl GitRunner for DefaultGitRunner {
    fn run_git(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("git")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }
}
