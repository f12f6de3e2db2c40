//! Walks a candidate value and applies the predicate to the strings the policy selects.

use serde_json::{Map, Value};

use super::diagnostics::{DiagnosticSink, Rejection};
use super::error::InvalidSource;
use crate::policy::Policy;
use crate::predicate::UrlPredicate;

pub(super) struct Traversal<'g> {
    pub(super) policy: &'g Policy,
    pub(super) predicate: &'g dyn UrlPredicate,
    pub(super) sink: &'g dyn DiagnosticSink,
}

impl Traversal<'_> {
    /// Stops at the first rejected string.
    pub(super) fn visit(&self, value: &Value) -> Result<(), InvalidSource> {
        match value {
            Value::String(s) => self.check_scalar(s),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .try_for_each(|s| self.check_scalar(s)),
            Value::Object(map) => self.visit_object(map),
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
        }
    }

    fn visit_object(&self, map: &Map<String, Value>) -> Result<(), InvalidSource> {
        let selected = self.policy.fields_to_validate();
        if selected.is_empty() {
            // One level only: nested objects and arrays are not visited.
            for (key, prop) in map {
                if let Value::String(s) = prop {
                    self.check_field(key, s)?;
                }
            }
            return Ok(());
        }

        for selector in selected {
            if let Some(Value::String(s)) = select(map, selector) {
                self.check_field(selector, s)?;
            }
        }
        Ok(())
    }

    fn passes(&self, candidate: &str) -> bool {
        !self.policy.should_check(candidate) || self.predicate.is_valid(candidate)
    }

    pub(super) fn check_scalar(&self, candidate: &str) -> Result<(), InvalidSource> {
        if self.passes(candidate) {
            return Ok(());
        }
        let message = self.policy.error_message();
        self.sink.record(&Rejection {
            message: message.to_string(),
            value: candidate.to_string(),
            field: None,
        });
        Err(InvalidSource::plain(message))
    }

    fn check_field(&self, field: &str, candidate: &str) -> Result<(), InvalidSource> {
        if self.passes(candidate) {
            return Ok(());
        }
        let message = self.policy.error_message();
        self.sink.record(&Rejection {
            message: format!("{message} in field"),
            value: candidate.to_string(),
            field: Some(field.to_string()),
        });
        Err(InvalidSource::in_field(message, field))
    }
}

/// Resolves a field selector against an object.
///
/// A literal key wins; otherwise the selector is read as a dotted path through
/// nested objects. A path through a non-object or a missing key selects nothing.
pub fn select<'v>(map: &'v Map<String, Value>, selector: &str) -> Option<&'v Value> {
    if let Some(value) = map.get(selector) {
        return Some(value);
    }
    let mut segments = selector.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
