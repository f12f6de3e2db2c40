//! Domain allow-list matched against the raw, unparsed candidate.

use regex::Regex;

/// Compiled `^https?://(?:d1|d2|...)(/|$|:)` anchor.
///
/// Matching runs on the raw candidate, not the parsed host, so it also
/// enforces an http/https prefix independently of `http_only`, and the domain
/// must be followed by `/`, `:` or the end of the string.
#[derive(Debug, Clone)]
pub struct AllowList {
    pattern: Regex,
}

impl AllowList {
    /// Builds the anchor, or `None` when `domains` is empty (no restriction).
    pub fn new(domains: &[String]) -> Result<Option<Self>, regex::Error> {
        if domains.is_empty() {
            return Ok(None);
        }
        let alternatives = domains
            .iter()
            .map(|d| regex::escape(d))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("^https?://(?:{alternatives})(/|$|:)"))?;
        Ok(Some(Self { pattern }))
    }

    pub fn matches(&self, raw: &str) -> bool {
        self.pattern.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(domains: &[&str]) -> AllowList {
        let domains: Vec<String> = domains.iter().map(|d| d.to_string()).collect();
        AllowList::new(&domains).unwrap().expect("non-empty list")
    }

    #[test]
    fn empty_list_means_no_restriction() {
        assert!(AllowList::new(&[]).unwrap().is_none());
    }

    #[test]
    fn domain_must_be_followed_by_boundary() {
        let allow = list(&["example.com"]);
        assert!(allow.matches("http://example.com"));
        assert!(allow.matches("https://example.com/x"));
        assert!(allow.matches("http://example.com:8080/x"));
        assert!(!allow.matches("http://example.com.evil.com"));
        assert!(!allow.matches("http://example.community"));
        assert!(!allow.matches("http://evil.example.com"));
    }

    #[test]
    fn dots_are_escaped() {
        let allow = list(&["example.com"]);
        assert!(!allow.matches("http://exampleXcom/"));
    }

    #[test]
    fn scheme_is_part_of_the_anchor() {
        let allow = list(&["example.com"]);
        assert!(!allow.matches("ftp://example.com/"));
        assert!(!allow.matches("HTTP://example.com/"));
    }

    #[test]
    fn any_listed_domain_matches() {
        let allow = list(&["example.com", "cdn.example.org"]);
        assert!(allow.matches("https://cdn.example.org/a.png"));
        assert!(allow.matches("https://example.com"));
        assert!(!allow.matches("https://example.org"));
        assert_eq!(
            allow.as_str(),
            r"^https?://(?:example\.com|cdn\.example\.org)(/|$|:)"
        );
    }
}
