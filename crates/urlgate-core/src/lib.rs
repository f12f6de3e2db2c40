//! Source URL validation for request values.
//!
//! [`SourceGuard`] sits in front of handler logic: it checks that the strings
//! in a request value are acceptable URLs under a [`Policy`] (http/https only,
//! dotted host, optional domain allow-list) and returns the value untouched,
//! or the first [`InvalidSource`].

pub mod config;
pub mod guard;
pub mod logging;
pub mod policy;
pub mod predicate;

pub use guard::{DiagnosticSink, GuardArg, InvalidSource, Rejection, SourceGuard};
pub use policy::{Policy, ValidatorOptions, DEFAULT_ERROR_MESSAGE};
pub use predicate::{ConfigError, DefaultUrlPredicate, Rejected, UrlPredicate};
