//! `urlgate check [path]` – validate a JSON value.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use urlgate_core::{InvalidSource, SourceGuard};

use super::Outcome;

pub fn run_check(guard: &SourceGuard, path: Option<&Path>, quiet: bool) -> Result<Outcome> {
    let text = read_input(path)?;
    match check_document(guard, &text)? {
        Ok(value) => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Ok(Outcome::Accepted)
        }
        Err(rejection) => {
            println!("rejected: {rejection}");
            Ok(Outcome::Rejected)
        }
    }
}

/// Parses `text` as JSON and applies the guard. The outer error is for
/// malformed JSON; the inner one is the validation verdict.
pub fn check_document(guard: &SourceGuard, text: &str) -> Result<Result<Value, InvalidSource>> {
    let value: Value = serde_json::from_str(text).context("parse input JSON")?;
    Ok(guard.apply_owned(value))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("read input file: {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read input from stdin")?;
            Ok(buf)
        }
    }
}
