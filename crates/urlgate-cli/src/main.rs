mod cli;

use std::process::ExitCode;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Logging is initialised inside, once the config (and its filter) is known.
    match CliCommand::run_from_args() {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("urlgate error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
