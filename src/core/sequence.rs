//! Scripted branch preparation: a fixed sequence of git steps.
//!
//! The sequence inspects the repository (short status, current branch,
//! recent commits), switches to a base branch, creates a feature branch
//! from it, and confirms the result. Steps run strictly in order; a
//! failed step records its outcome and execution continues regardless,
//! so the discrepancy is visible in later steps (an unchanged branch
//! name after a checkout means the checkout failed).

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::git;

/// One scripted invocation: a display label and git arguments.
#[derive(Debug, Clone)]
pub struct Step {
    pub label: String,
    pub args: Vec<String>,
}

impl Step {
    fn new(label: impl Into<String>, args: &[&str]) -> Self {
        Self {
            label: label.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Explicit outcome of one executed step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    pub label: String,
    pub command: String,
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Summary of step results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// The full result of a branch preparation run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResult {
    pub path: String,
    pub base_branch: String,
    pub new_branch: String,
    pub steps: Vec<StepOutcome>,
    /// Trimmed stdout of the final branch-name step.
    pub final_branch: String,
    pub summary: StepSummary,
}

/// The fixed step list, in execution order.
pub fn branch_prep_steps(base: &str, branch: &str) -> Vec<Step> {
    vec![
        Step::new("Git Status", &["status", "--short"]),
        Step::new("Current Branch", &["branch", "--show-current"]),
        Step::new("Recent Commits", &["log", "--oneline", "-3"]),
        Step::new(format!("Switching to {}", base), &["checkout", base]),
        Step::new("Current Branch (after switch)", &["branch", "--show-current"]),
        Step::new(format!("Creating {}", branch), &["checkout", "-b", branch]),
        Step::new("Final Branch", &["branch", "--show-current"]),
    ]
}

/// Execute the branch preparation sequence against `path`.
///
/// Later steps depend on the branch state produced by earlier ones, but a
/// failed step never aborts the run: its outcome is recorded and the next
/// step executes against whatever state the repository is actually in.
/// Only a spawn failure (git itself unlaunchable) is an error.
pub fn run_branch_prep(path: &Path, base: &str, branch: &str) -> Result<SequenceResult> {
    if base.trim().is_empty() {
        return Err(Error::validation_invalid_argument(
            "base",
            "Base branch name is empty",
            None,
            None,
        ));
    }
    if branch.trim().is_empty() {
        return Err(Error::validation_invalid_argument(
            "branch",
            "New branch name is empty",
            None,
            None,
        ));
    }

    let steps = branch_prep_steps(base, branch);
    log_status!("branch", "Running {} steps in {}", steps.len(), path.display());

    let mut outcomes: Vec<StepOutcome> = Vec::with_capacity(steps.len());
    for step in steps {
        let args: Vec<&str> = step.args.iter().map(String::as_str).collect();
        let outcome = git::capture(path, &args)?;
        outcomes.push(StepOutcome {
            label: step.label,
            command: format!("git {}", args.join(" ")),
            success: outcome.success,
            exit_code: outcome.exit_code,
            stdout: outcome.captured.stdout,
            stderr: outcome.captured.stderr,
        });
    }

    let final_branch = outcomes
        .last()
        .map(|o| o.stdout.trim().to_string())
        .unwrap_or_default();
    let succeeded = outcomes.iter().filter(|o| o.success).count();
    let failed = outcomes.len() - succeeded;

    Ok(SequenceResult {
        path: path.display().to_string(),
        base_branch: base.to_string(),
        new_branch: branch.to_string(),
        final_branch,
        summary: StepSummary {
            total: outcomes.len(),
            succeeded,
            failed,
        },
        steps: outcomes,
    })
}
