//! Rename engine: ordered literal replacements across a source tree.
//!
//! Given a rules file, this engine:
//! 1. Recursively enumerates files whose name ends with the extension filter
//! 2. Applies every rule to each file's full text, in declared order
//! 3. Rewrites a file if and only if its content changed
//!
//! Replacement is plain substring substitution over one shared buffer, so
//! earlier rules can affect whether later literals match. That
//! order-dependence is intentional and preserved exactly.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::rules::RuleFile;
use crate::utils::io;

/// A file rewritten (or, in dry-run, needing a rewrite) by the rename pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFix {
    /// File path relative to root.
    pub file: String,
    /// Number of occurrences replaced in this file.
    pub replacements: usize,
}

/// Report for one rename pass.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameResult {
    pub root: String,
    pub extension: String,
    /// Files enumerated under root matching the extension filter.
    pub scanned: usize,
    pub fixed: Vec<FileFix>,
    pub total_fixed: usize,
    /// Whether changes were written to disk.
    pub applied: bool,
}

/// Apply every rule to `content`, mutating one in-memory buffer in sequence.
///
/// Each rule replaces all non-overlapping occurrences of its search literal,
/// left to right. Returns the final text and the number of occurrences
/// replaced, counted against the buffer state each rule saw.
pub fn apply_rules(content: &str, rules: &RuleFile) -> (String, usize) {
    let mut text = content.to_string();
    let mut replacements = 0;

    for rule in rules.iter() {
        let count = text.matches(rule.search.as_str()).count();
        if count > 0 {
            replacements += count;
            text = text.replace(rule.search.as_str(), &rule.replace);
        }
    }

    (text, replacements)
}

/// Apply the rules to every matching file under `root`.
///
/// Files are read whole, rewritten in place when content changed, and
/// reported with paths relative to root. The first unreadable or
/// unwritable file aborts the pass; files already rewritten stay
/// rewritten; there is no rollback.
pub fn fix_tree(root: &Path, extension: &str, rules: &RuleFile, write: bool) -> Result<RenameResult> {
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Not a directory: {}", root.display()),
            None,
            None,
        ));
    }

    let suffix = format!(".{}", extension);
    let mut files = Vec::new();
    walk_recursive(root, &suffix, &mut files);
    files.sort();

    let mut fixed = Vec::new();
    for path in &files {
        let original = io::read_file(path, "read source file")?;
        let (updated, replacements) = apply_rules(&original, rules);

        if updated != original {
            if write {
                io::write_file(path, &updated, "write source file")?;
            }
            let relative = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();
            log_status!("rename", "Fixed: {}", relative);
            fixed.push(FileFix {
                file: relative,
                replacements,
            });
        }
    }

    let total_fixed = fixed.len();
    Ok(RenameResult {
        root: root.display().to_string(),
        extension: extension.to_string(),
        scanned: files.len(),
        fixed,
        total_fixed,
        applied: write,
    })
}

fn walk_recursive(dir: &Path, suffix: &str, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_recursive(&path, suffix, files);
        } else {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if name.ends_with(suffix) {
                files.push(path);
            }
        }
    }
}
