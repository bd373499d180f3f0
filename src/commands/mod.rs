pub type CmdResult<T> = remodel::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod branch;
pub mod rename;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        remodel::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (remodel::Result<serde_json::Value>, i32) {
    crate::tty::status("remodel is working...");

    match command {
        crate::Commands::Rename(args) => dispatch!(args, global, rename),
        crate::Commands::Branch(args) => dispatch!(args, global, branch),
    }
}

pub(crate) fn run_text(
    command: crate::Commands,
    global: &GlobalArgs,
) -> remodel::Result<(String, i32)> {
    match command {
        crate::Commands::Branch(args) => branch::run_text(args, global),
        _ => Err(remodel::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support text output",
            None,
            None,
        )),
    }
}
