//! The single failure the guard propagates.

use thiserror::Error;

/// A checked string failed the URL predicate.
///
/// The host maps this to a client error; [`status_code`](Self::status_code)
/// gives the HTTP status the reference deployment uses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidSource {
    message: String,
    field: Option<String>,
}

impl InvalidSource {
    /// Rejection of a scalar or array element: the configured message as is.
    pub fn plain(message: &str) -> Self {
        Self {
            message: message.to_string(),
            field: None,
        }
    }

    /// Rejection of an object field: `"<message> in field: <field>"`.
    pub fn in_field(message: &str, field: &str) -> Self {
        Self {
            message: format!("{message} in field: {field}"),
            field: Some(field.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Offending field (selector as configured), if the value was an object.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn status_code(&self) -> u16 {
        400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_has_no_field() {
        let err = InvalidSource::plain("Invalid source URL");
        assert_eq!(err.to_string(), "Invalid source URL");
        assert_eq!(err.field(), None);
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn field_message_is_suffixed() {
        let err = InvalidSource::in_field("Invalid source URL", "avatar");
        assert_eq!(err.message(), "Invalid source URL in field: avatar");
        assert_eq!(err.field(), Some("avatar"));
    }
}
