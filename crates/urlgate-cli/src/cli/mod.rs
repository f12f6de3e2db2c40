//! CLI for urlgate.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlgate_core::config::{self, UrlgateConfig};
use urlgate_core::logging;
use urlgate_core::ValidatorOptions;

use commands::{run_check, run_config, run_url, Outcome};

/// Top-level CLI for urlgate.
#[derive(Debug, Parser)]
#[command(name = "urlgate")]
#[command(about = "urlgate: validate source URLs in JSON request values", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Policy flags shared by every subcommand; they override the config file.
#[derive(Debug, Default, Args)]
pub struct PolicyArgs {
    /// Config file to use instead of ~/.config/urlgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept any URL scheme and check every string, not only http(s) ones.
    #[arg(long, global = true)]
    pub any_scheme: bool,

    /// Only accept URLs on this domain (repeatable).
    #[arg(long = "allow-domain", global = true, value_name = "DOMAIN")]
    pub allow_domains: Vec<String>,

    /// Only check this object field or dotted path (repeatable).
    #[arg(long = "field", global = true, value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Rejection message.
    #[arg(long, global = true)]
    pub message: Option<String>,
}

impl PolicyArgs {
    /// Only flags that were actually given become `Some`.
    pub fn overrides(&self) -> ValidatorOptions {
        ValidatorOptions {
            http_only: self.any_scheme.then_some(false),
            error_message: self.message.clone(),
            fields_to_validate: (!self.fields.is_empty()).then(|| self.fields.clone()),
            allowed_domains: (!self.allow_domains.is_empty()).then(|| self.allow_domains.clone()),
        }
    }

    fn load_config(&self) -> Result<UrlgateConfig> {
        match &self.config {
            Some(path) => config::load_from_path(path),
            None => config::load_or_init(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a JSON value read from a file (or stdin).
    Check {
        /// JSON file; `-` or nothing reads stdin.
        path: Option<PathBuf>,

        /// Do not echo the value on success.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Check a single URL with the URL predicate and report why it fails.
    Url {
        /// URL to check.
        url: String,
    },

    /// Print the effective policy as TOML.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let cfg = cli.policy.load_config()?;
        if let Err(e) = logging::init_logging(&cfg.logging.filter) {
            eprintln!("urlgate: file logging unavailable ({e:#}), logging to stderr");
            logging::init_logging_stderr(&cfg.logging.filter);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let guard = cfg.guard(cli.policy.overrides())?;

        match cli.command {
            CliCommand::Check { path, quiet } => run_check(&guard, path.as_deref(), quiet),
            CliCommand::Url { url } => run_url(guard.policy(), &url),
            CliCommand::Config => run_config(guard.policy()),
        }
    }
}

#[cfg(test)]
mod tests;
