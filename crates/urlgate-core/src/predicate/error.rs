//! Rejection reasons for the default URL predicate and construction errors.

use thiserror::Error;

/// Why [`DefaultUrlPredicate`](super::DefaultUrlPredicate) refused a candidate.
///
/// These never propagate out of the guard; they collapse to `false` in
/// [`UrlPredicate::is_valid`](super::UrlPredicate::is_valid) and are kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("empty URL")]
    Empty,
    #[error("URL contains whitespace")]
    Whitespace,
    #[error("unparseable URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("scheme not allowed: {0}")]
    Scheme(String),
    #[error("malformed host: {0:?}")]
    Host(String),
    #[error("domain not in allow-list")]
    Domain,
}

/// Error building a predicate from a policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("allowed_domains cannot be compiled: {0}")]
    AllowList(#[from] regex::Error),
}
