//! Git subprocess primitives (path-based).
//!
//! Every invocation receives the repository path explicitly; the process
//! working directory is never changed.

use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::command::{self, CommandOutcome};

/// Run `git <args>` in `path`, capturing the outcome.
///
/// A spawn failure (git missing from PATH, unreadable directory) is the
/// only `Err`; a nonzero exit is a normal outcome with `success = false`.
pub fn capture(path: &Path, args: &[&str]) -> Result<CommandOutcome> {
    command::capture_in(path, "git", args).map_err(|e| {
        Error::git_command_failed(format!("Failed to run git {}: {}", args.join(" "), e))
    })
}

/// Current branch name, trimmed.
///
/// Unlike [`capture`], a failed `git branch --show-current` is an error
/// here: callers asking for the branch name need one.
pub fn current_branch(path: &Path) -> Result<String> {
    let outcome = capture(path, &["branch", "--show-current"])?;
    if !outcome.success {
        return Err(Error::git_command_failed(format!(
            "git branch --show-current failed: {}",
            command::error_text(&outcome.captured)
        )));
    }
    Ok(outcome.captured.stdout.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reports_failure_outside_a_repo() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = capture(dir.path(), &["status", "--short"]).unwrap();
        assert!(!outcome.success);
        assert!(!outcome.captured.stderr.is_empty());
    }

    #[test]
    fn current_branch_errors_outside_a_repo() {
        let dir = tempfile::tempdir().unwrap();
        let err = current_branch(dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "git.command_failed");
    }
}
