use clap::Args;
use std::path::Path;

use remodel::sequence::{self, SequenceResult};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct BranchArgs {
    /// Repository root
    path: String,
    /// Existing branch to switch to before branching
    #[arg(long, default_value = "develop")]
    base: String,
    /// New branch to create from the base
    #[arg(long)]
    branch: String,
    /// Emit the JSON envelope instead of step headings
    #[arg(long)]
    json: bool,
}

pub fn is_json(args: &BranchArgs) -> bool {
    args.json
}

pub fn run(args: BranchArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<SequenceResult> {
    let result = sequence::run_branch_prep(Path::new(&args.path), &args.base, &args.branch)?;
    let exit_code = if result.summary.failed > 0 { 1 } else { 0 };
    Ok((result, exit_code))
}

pub fn run_text(
    args: BranchArgs,
    global: &crate::commands::GlobalArgs,
) -> remodel::Result<(String, i32)> {
    let (result, exit_code) = run(args, global)?;
    Ok((render_sequence(&result), exit_code))
}

/// Render step outcomes under their headings. Stderr is never shown; a
/// failed step is visible only through the output of later steps.
fn render_sequence(result: &SequenceResult) -> String {
    let mut out = String::new();
    for step in &result.steps {
        out.push_str(&format!("===== {} =====\n", step.label));
        out.push_str(&step.stdout);
        if !step.stdout.is_empty() && !step.stdout.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str("===== DONE =====\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use remodel::sequence::{StepOutcome, StepSummary};

    fn outcome(label: &str, stdout: &str, success: bool) -> StepOutcome {
        StepOutcome {
            label: label.to_string(),
            command: "git test".to_string(),
            success,
            exit_code: if success { 0 } else { 1 },
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn renders_headings_with_step_stdout() {
        let result = SequenceResult {
            path: "/repo".to_string(),
            base_branch: "develop".to_string(),
            new_branch: "feature/x".to_string(),
            steps: vec![
                outcome("Git Status", "M src/app.ts\n", true),
                outcome("Current Branch", "main\n", true),
            ],
            final_branch: "main".to_string(),
            summary: StepSummary {
                total: 2,
                succeeded: 2,
                failed: 0,
            },
        };

        let text = render_sequence(&result);
        assert_eq!(
            text,
            "===== Git Status =====\nM src/app.ts\n\n===== Current Branch =====\nmain\n\n===== DONE =====\n"
        );
    }

    #[test]
    fn failed_step_stderr_is_not_rendered() {
        let mut step = outcome("Creating feature/x", "", false);
        step.stderr = "fatal: a branch named 'feature/x' already exists".to_string();

        let result = SequenceResult {
            path: "/repo".to_string(),
            base_branch: "develop".to_string(),
            new_branch: "feature/x".to_string(),
            steps: vec![step],
            final_branch: "develop".to_string(),
            summary: StepSummary {
                total: 1,
                succeeded: 0,
                failed: 1,
            },
        };

        let text = render_sequence(&result);
        assert!(!text.contains("fatal"));
        assert_eq!(
            text,
            "===== Creating feature/x =====\n\n===== DONE =====\n"
        );
    }
}
