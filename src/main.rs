use clap::{Parser, Subcommand};

mod commands;
mod tty;

use commands::{branch, rename, GlobalArgs};
use remodel::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "remodel")]
#[command(version = VERSION)]
#[command(about = "CLI for renaming database model identifiers after schema migrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply ordered literal rename rules across a source tree
    Rename(rename::RenameArgs),
    /// Run the scripted branch preparation sequence against a repository
    Branch(branch::BranchArgs),
}

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Text,
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Branch(args) if !branch::is_json(args) => ResponseMode::Text,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    match response_mode(&cli.command) {
        ResponseMode::Text => match commands::run_text(cli.command, &global) {
            Ok((content, exit_code)) => {
                print!("{}", content);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let _ = output::print_result::<serde_json::Value>(Err(err));
                std::process::ExitCode::from(exit_code_to_u8(1))
            }
        },
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command, &global);
            let _ = output::print_json_result(json_result);
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
