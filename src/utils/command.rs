//! Command execution primitives with explicit working directories.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

/// Captured output from command execution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CapturedOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

impl CapturedOutput {
    pub fn new(stdout: String, stderr: String) -> Self {
        Self { stdout, stderr }
    }
}

/// Explicit outcome of one command invocation.
///
/// A nonzero exit is a normal outcome, not an error. Callers decide
/// what a failed step means.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    pub success: bool,
    pub exit_code: i32,
    pub captured: CapturedOutput,
}

/// Run a command in a specific directory, capturing stdout, stderr, and
/// exit status.
///
/// The working directory is always passed per invocation; nothing here
/// mutates the process-wide current directory. Only a spawn failure
/// (binary missing, directory unreadable) is an `Err`.
pub fn capture_in(dir: &Path, program: &str, args: &[&str]) -> std::io::Result<CommandOutcome> {
    let output = Command::new(program).args(args).current_dir(dir).output()?;

    Ok(CommandOutcome {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(1),
        captured: CapturedOutput::new(
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        ),
    })
}

/// Extract error text from captured output.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(captured: &CapturedOutput) -> String {
    let stderr = captured.stderr.trim();
    if !stderr.is_empty() {
        stderr.to_string()
    } else {
        captured.stdout.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_in_succeeds_with_valid_command() {
        let outcome = capture_in(Path::new("/tmp"), "echo", &["hello"]).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.captured.stdout.trim(), "hello");
    }

    #[test]
    fn capture_in_reports_failure_without_error() {
        let outcome = capture_in(Path::new("/tmp"), "false", &[]).unwrap();
        assert!(!outcome.success);
        assert_ne!(outcome.exit_code, 0);
    }

    #[test]
    fn capture_in_errors_on_missing_binary() {
        let result = capture_in(Path::new("/tmp"), "nonexistent_command_xyz", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn error_text_prefers_stderr() {
        let captured = CapturedOutput::new("stdout content".to_string(), "stderr content".to_string());
        assert_eq!(error_text(&captured), "stderr content");
    }

    #[test]
    fn error_text_falls_back_to_stdout() {
        let captured = CapturedOutput::new("stdout content".to_string(), String::new());
        assert_eq!(error_text(&captured), "stdout content");
    }
}
