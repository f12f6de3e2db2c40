//! CLI command handlers. Each command is in its own file.

mod check;
mod config;
mod url;

use std::process::ExitCode;

pub use check::run_check;
pub use config::run_config;
pub use url::run_url;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    /// Input was rejected by the validator (exit status 2).
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Accepted => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::from(2),
        }
    }
}
