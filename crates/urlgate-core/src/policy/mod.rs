//! Validation policy: partial options as supplied by callers and config files,
//! and the fully-populated immutable [`Policy`] built from them once.

use serde::{Deserialize, Serialize};

/// Message used when no `error_message` is configured.
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid source URL";

/// Partial validator options. Every field is optional; `None` means "use the default".
///
/// Accepts snake_case keys (TOML) as well as the camelCase spellings used by
/// JSON hosts (`httpOnly`, `errorMessage`, `fieldsToValidate`, `allowedDomains`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Only check strings that start with `http`, and only accept http/https schemes.
    #[serde(alias = "httpOnly", skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// Message carried by the rejection.
    #[serde(alias = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// When the value is an object, only these keys (or dotted paths) are checked.
    #[serde(alias = "fieldsToValidate", skip_serializing_if = "Option::is_none")]
    pub fields_to_validate: Option<Vec<String>>,
    /// If non-empty, URLs must point at one of these domains.
    #[serde(alias = "allowedDomains", skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn fields_to_validate<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields_to_validate = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Layers `overrides` on top of `self`: every `Some` in `overrides` wins.
    pub fn merge(self, overrides: ValidatorOptions) -> ValidatorOptions {
        ValidatorOptions {
            http_only: overrides.http_only.or(self.http_only),
            error_message: overrides.error_message.or(self.error_message),
            fields_to_validate: overrides.fields_to_validate.or(self.fields_to_validate),
            allowed_domains: overrides.allowed_domains.or(self.allowed_domains),
        }
    }

    /// Resolves the options against the defaults.
    pub fn build(self) -> Policy {
        Policy::from_options(self)
    }
}

/// Effective, read-only validation policy for one validation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    http_only: bool,
    error_message: String,
    fields_to_validate: Vec<String>,
    allowed_domains: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            http_only: true,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            fields_to_validate: Vec::new(),
            allowed_domains: Vec::new(),
        }
    }
}

impl Policy {
    /// Shallow merge of `options` over the defaults. Absent fields take the
    /// default; explicit values (including `false` and `""`) are kept as given.
    pub fn from_options(options: ValidatorOptions) -> Self {
        let defaults = Self::default();
        Self {
            http_only: options.http_only.unwrap_or(defaults.http_only),
            error_message: options.error_message.unwrap_or(defaults.error_message),
            fields_to_validate: options
                .fields_to_validate
                .unwrap_or(defaults.fields_to_validate),
            allowed_domains: options.allowed_domains.unwrap_or(defaults.allowed_domains),
        }
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Selected object keys; empty means every top-level key.
    pub fn fields_to_validate(&self) -> &[String] {
        &self.fields_to_validate
    }

    /// Domain allow-list; empty means no restriction.
    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed_domains
    }

    /// Whether a raw string is subject to checking at all.
    ///
    /// With `http_only` this is a plain prefix test on the text, not a parse.
    pub fn should_check(&self, candidate: &str) -> bool {
        !self.http_only || candidate.starts_with("http")
    }
}

impl From<ValidatorOptions> for Policy {
    fn from(options: ValidatorOptions) -> Self {
        Policy::from_options(options)
    }
}
