//! `urlgate url <url>` – run the URL predicate on one string.

use anyhow::{Context, Result};
use urlgate_core::{DefaultUrlPredicate, Policy};

use super::Outcome;

pub fn run_url(policy: &Policy, url: &str) -> Result<Outcome> {
    let predicate = DefaultUrlPredicate::new(policy).context("build URL predicate")?;
    match predicate.check(url) {
        Ok(()) => {
            println!("valid");
            Ok(Outcome::Accepted)
        }
        Err(reason) => {
            tracing::debug!(url, %reason, "url rejected");
            println!("invalid: {reason}");
            Ok(Outcome::Rejected)
        }
    }
}
