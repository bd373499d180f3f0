use clap::Args;
use serde::Serialize;
use std::path::Path;

use remodel::rename::{self, FileFix};
use remodel::rules::RuleFile;
use remodel::Error;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RenameArgs {
    /// Root directory to scan
    #[arg(long)]
    path: String,
    /// JSON rules file with ordered model and relation rule sets
    #[arg(long)]
    rules: String,
    /// File extension to process (leading dot optional)
    #[arg(long, default_value = "ts")]
    ext: String,
    /// Report what would change without rewriting files
    #[arg(long)]
    dry_run: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenameOutput {
    #[serde(rename = "rename.run", rename_all = "camelCase")]
    Run {
        root: String,
        extension: String,
        dry_run: bool,
        rules: usize,
        scanned: usize,
        total_fixed: usize,
        fixed: Vec<FileFix>,
    },
}

pub fn run(args: RenameArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RenameOutput> {
    let extension = args.ext.trim_start_matches('.');
    if extension.is_empty() {
        return Err(Error::validation_invalid_argument(
            "ext",
            "Extension is empty",
            None,
            None,
        ));
    }

    let rules = RuleFile::load(Path::new(&args.rules))?;
    let result = rename::fix_tree(Path::new(&args.path), extension, &rules, !args.dry_run)?;

    Ok((
        RenameOutput::Run {
            root: result.root,
            extension: result.extension,
            dry_run: args.dry_run,
            rules: rules.len(),
            scanned: result.scanned,
            total_fixed: result.total_fixed,
            fixed: result.fixed,
        },
        0,
    ))
}
