//! URL predicate: decides whether a single string is an acceptable source URL.
//!
//! [`UrlPredicate`] is the pluggable seam; hosts may supply their own
//! implementation (or a closure). [`DefaultUrlPredicate`] is the built-in one:
//! whitespace rejection, WHATWG parse, scheme restriction, host-shape check,
//! and an optional domain allow-list.

mod allow_list;
mod error;
mod host;

pub use allow_list::AllowList;
pub use error::{ConfigError, Rejected};
pub use host::has_dotted_host;

use crate::policy::Policy;

/// Validity check for a single URL string. Must not panic.
pub trait UrlPredicate: Send + Sync {
    fn is_valid(&self, url: &str) -> bool;
}

impl<F> UrlPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, url: &str) -> bool {
        self(url)
    }
}

/// Built-in predicate, closed over the scheme restriction and allow-list of a policy.
#[derive(Debug, Clone)]
pub struct DefaultUrlPredicate {
    http_only: bool,
    allow_list: Option<AllowList>,
}

impl Default for DefaultUrlPredicate {
    /// Http-only, no domain restriction.
    fn default() -> Self {
        Self {
            http_only: true,
            allow_list: None,
        }
    }
}

impl DefaultUrlPredicate {
    /// Builds the predicate for `policy`; the allow-list anchor is compiled once here.
    pub fn new(policy: &Policy) -> Result<Self, ConfigError> {
        Ok(Self {
            http_only: policy.http_only(),
            allow_list: AllowList::new(policy.allowed_domains())?,
        })
    }

    /// Like [`is_valid`](UrlPredicate::is_valid), but reports which rule failed.
    pub fn check(&self, candidate: &str) -> Result<(), Rejected> {
        if candidate.trim().is_empty() {
            return Err(Rejected::Empty);
        }
        if candidate.chars().any(is_js_whitespace) {
            return Err(Rejected::Whitespace);
        }

        let parsed = url::Url::parse(candidate)?;

        if self.http_only && !matches!(parsed.scheme(), "http" | "https") {
            return Err(Rejected::Scheme(parsed.scheme().to_string()));
        }

        let host = parsed.host_str().unwrap_or_default();
        if !has_dotted_host(host) {
            return Err(Rejected::Host(host.to_string()));
        }

        match &self.allow_list {
            Some(allow) if !allow.matches(candidate) => Err(Rejected::Domain),
            _ => Ok(()),
        }
    }
}

impl UrlPredicate for DefaultUrlPredicate {
    fn is_valid(&self, url: &str) -> bool {
        self.check(url).is_ok()
    }
}

/// Literal whitespace, including the BOM that `str::trim` leaves alone.
fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

#[cfg(test)]
mod tests;
