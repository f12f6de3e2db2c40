//! urlgate: source URL validation for request values.
//!
//! Facade over [`urlgate_core`]; the `urlgate` binary lives in `crates/urlgate-cli`.

pub use urlgate_core::*;
