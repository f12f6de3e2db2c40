//! Host-shape check applied after parsing.

/// Returns true if `host` looks like a dotted host name: a non-empty first
/// label, a dot, and at least one more non-dot character right after it.
///
/// Rejects empty hosts, the bare `.com`, single-label hosts such as
/// `localhost`, and bracketed IPv6 literals.
pub fn has_dotted_host(host: &str) -> bool {
    if host.is_empty() || host == ".com" {
        return false;
    }
    match host.find('.') {
        Some(0) | None => false,
        Some(dot) => host[dot + 1..]
            .chars()
            .next()
            .is_some_and(|c| c != '.'),
    }
}
