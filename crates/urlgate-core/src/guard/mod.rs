//! Source guard: the request-value hook.
//!
//! A [`SourceGuard`] owns an effective [`Policy`], a [`UrlPredicate`] and a
//! [`DiagnosticSink`]. [`SourceGuard::apply`] walks a `serde_json::Value`,
//! checks the strings the policy selects, and returns the value untouched or
//! the first [`InvalidSource`].
//!
//! Traversal rules:
//! - string: checked (when the `http` prefix gate lets it through);
//! - array: each string element checked, other elements ignored;
//! - object: every top-level string field, or only `fields_to_validate`
//!   (literal keys first, then dotted paths such as `nested.url`);
//! - anything else passes through.

mod diagnostics;
mod error;
mod traverse;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

pub use diagnostics::{DiagnosticSink, MemorySink, NullSink, Rejection, TracingSink};
pub use error::InvalidSource;
pub use traverse::select;

use crate::policy::{Policy, ValidatorOptions};
use crate::predicate::{ConfigError, DefaultUrlPredicate, UrlPredicate};
use traverse::Traversal;

/// First construction argument: either options or a predicate, chosen by the caller.
#[derive(Clone)]
pub enum GuardArg {
    Options(ValidatorOptions),
    Predicate(Arc<dyn UrlPredicate>),
}

impl From<ValidatorOptions> for GuardArg {
    fn from(options: ValidatorOptions) -> Self {
        GuardArg::Options(options)
    }
}

impl fmt::Debug for GuardArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardArg::Options(options) => f.debug_tuple("Options").field(options).finish(),
            GuardArg::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Validates source URLs in request values. Immutable and shareable across threads.
#[derive(Clone)]
pub struct SourceGuard {
    policy: Policy,
    predicate: Arc<dyn UrlPredicate>,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for SourceGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceGuard")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Default for SourceGuard {
    fn default() -> Self {
        Self::with_predicate(Policy::default(), Arc::new(DefaultUrlPredicate::default()))
    }
}

impl SourceGuard {
    /// Guard with the default predicate built from `policy`.
    pub fn new(policy: Policy) -> Result<Self, ConfigError> {
        let predicate = DefaultUrlPredicate::new(&policy)?;
        Ok(Self::with_predicate(policy, Arc::new(predicate)))
    }

    pub fn from_options(options: ValidatorOptions) -> Result<Self, ConfigError> {
        Self::new(options.build())
    }

    /// Guard with a caller-supplied predicate. `policy` still drives the prefix
    /// gate, field selection and messages.
    pub fn with_predicate(policy: Policy, predicate: Arc<dyn UrlPredicate>) -> Self {
        Self {
            policy,
            predicate,
            sink: Arc::new(TracingSink),
        }
    }

    /// Resolves a guard from an explicit argument plus injected collaborators.
    ///
    /// - `Options(o)`: policy from `o`; the injected predicate if any, else the default one.
    /// - `Predicate(p)`: policy from the injected options (or defaults); predicate `p`.
    /// - nothing: policy from the injected options (or defaults); the injected
    ///   predicate if any, else the default one.
    pub fn resolve(
        arg: Option<GuardArg>,
        injected_predicate: Option<Arc<dyn UrlPredicate>>,
        injected_options: Option<ValidatorOptions>,
    ) -> Result<Self, ConfigError> {
        let (policy, predicate) = match arg {
            Some(GuardArg::Options(options)) => (options.build(), injected_predicate),
            Some(GuardArg::Predicate(predicate)) => (
                injected_options.unwrap_or_default().build(),
                Some(predicate),
            ),
            None => (injected_options.unwrap_or_default().build(), injected_predicate),
        };

        tracing::debug!(
            http_only = policy.http_only(),
            fields = ?policy.fields_to_validate(),
            allowed_domains = ?policy.allowed_domains(),
            custom_predicate = predicate.is_some(),
            "source guard configured"
        );

        match predicate {
            Some(predicate) => Ok(Self::with_predicate(policy, predicate)),
            None => Self::new(policy),
        }
    }

    /// Replaces the diagnostic sink (default: [`TracingSink`]).
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Validates `value` and hands back the same reference on success.
    pub fn apply<'v>(&self, value: &'v Value) -> Result<&'v Value, InvalidSource> {
        self.traversal().visit(value)?;
        Ok(value)
    }

    /// By-value form of [`apply`](Self::apply).
    pub fn apply_owned(&self, value: Value) -> Result<Value, InvalidSource> {
        self.traversal().visit(&value)?;
        Ok(value)
    }

    /// Validates a bare string as [`apply`](Self::apply) would.
    pub fn apply_str<'s>(&self, value: &'s str) -> Result<&'s str, InvalidSource> {
        self.traversal().check_scalar(value)?;
        Ok(value)
    }

    fn traversal(&self) -> Traversal<'_> {
        Traversal {
            policy: &self.policy,
            predicate: self.predicate.as_ref(),
            sink: self.sink.as_ref(),
        }
    }
}
