use super::*;
use crate::policy::ValidatorOptions;

fn predicate(options: ValidatorOptions) -> DefaultUrlPredicate {
    DefaultUrlPredicate::new(&options.build()).unwrap()
}

#[test]
fn accepts_plain_http_and_https() {
    let p = DefaultUrlPredicate::default();
    assert!(p.is_valid("http://example.com"));
    assert!(p.is_valid("https://test.com/path"));
    assert!(p.is_valid("https://cdn.example.com:8443/a/b.png?x=1#frag"));
    assert!(p.is_valid("http://example.com/a%20b"));
}

#[test]
fn rejects_empty_and_blank() {
    let p = DefaultUrlPredicate::default();
    assert_eq!(p.check(""), Err(Rejected::Empty));
    assert_eq!(p.check("   \t"), Err(Rejected::Empty));
}

#[test]
fn rejects_any_literal_whitespace() {
    let p = predicate(ValidatorOptions::new().http_only(false));
    assert_eq!(p.check("http://invalid url"), Err(Rejected::Whitespace));
    assert_eq!(p.check(" http://example.com"), Err(Rejected::Whitespace));
    assert_eq!(p.check("http://example.com/\n"), Err(Rejected::Whitespace));
    assert_eq!(p.check("http://example.com/\u{feff}"), Err(Rejected::Whitespace));
    assert_eq!(p.check("ftp://exa mple.com"), Err(Rejected::Whitespace));
}

#[test]
fn rejects_unparseable() {
    let p = DefaultUrlPredicate::default();
    assert!(matches!(p.check("http://"), Err(Rejected::Parse(_))));
    assert!(matches!(p.check("just-a-string"), Err(Rejected::Parse(_))));
    assert!(matches!(p.check("//example.com/x"), Err(Rejected::Parse(_))));
}

#[test]
fn http_only_restricts_scheme() {
    let p = DefaultUrlPredicate::default();
    assert_eq!(
        p.check("ftp://example.com"),
        Err(Rejected::Scheme("ftp".to_string()))
    );
    assert!(p.is_valid("HTTP://Example.com/"));
}

#[test]
fn other_schemes_allowed_when_not_http_only() {
    let p = predicate(ValidatorOptions::new().http_only(false));
    assert!(p.is_valid("ftp://example.com"));
    assert!(p.is_valid("ws://socket.example.com/feed"));
    // No host at all: fails the host-shape check.
    assert!(matches!(p.check("mailto:user@example.com"), Err(Rejected::Host(_))));
}

#[test]
fn rejects_bad_host_shapes() {
    let p = DefaultUrlPredicate::default();
    assert!(!p.is_valid("https://.com"));
    assert!(!p.is_valid("http://localhost:8080/"));
    assert!(!p.is_valid("http://[::1]/"));
    assert!(p.is_valid("http://127.0.0.1/"));
}

#[test]
fn allow_list_accepts_listed_domain() {
    let p = predicate(ValidatorOptions::new().allowed_domains(["example.com"]));
    assert!(p.is_valid("http://example.com/x"));
    assert!(p.is_valid("https://example.com"));
    assert!(p.is_valid("https://example.com:443/x"));
}

#[test]
fn allow_list_rejects_lookalikes() {
    let p = predicate(ValidatorOptions::new().allowed_domains(["example.com"]));
    assert_eq!(p.check("http://evil.example.com"), Err(Rejected::Domain));
    assert_eq!(p.check("http://example.com.evil.com"), Err(Rejected::Domain));
    assert_eq!(p.check("http://evil-example.com/"), Err(Rejected::Domain));
    assert_eq!(p.check("http://user@example.com/"), Err(Rejected::Domain));
}

#[test]
fn allow_list_is_scheme_sensitive_even_without_http_only() {
    let p = predicate(
        ValidatorOptions::new()
            .http_only(false)
            .allowed_domains(["example.com"]),
    );
    assert!(p.is_valid("https://example.com/file"));
    assert_eq!(p.check("ftp://example.com/file"), Err(Rejected::Domain));
}

#[test]
fn closures_are_predicates() {
    let https_only = |url: &str| url.starts_with("https://");
    assert!(https_only.is_valid("https://valid.com"));
    assert!(!https_only.is_valid("http://invalid.com"));
}
