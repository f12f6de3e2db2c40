//! `urlgate config` – print the effective policy.

use anyhow::Result;
use urlgate_core::Policy;

use super::Outcome;

pub fn run_config(policy: &Policy) -> Result<Outcome> {
    print!("{}", render_policy(policy)?);
    Ok(Outcome::Accepted)
}

fn render_policy(policy: &Policy) -> Result<String> {
    Ok(toml::to_string_pretty(policy)?)
}
