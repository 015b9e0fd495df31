//! Shared URL fixtures for integration tests.

/// Inputs covering the degenerate shapes a host may hand over unvalidated.
pub const AWKWARD_URLS: &[&str] = &[
    "",
    "?",
    "#",
    "&",
    "?#",
    "#?",
    "???",
    "http://x",
    "http://x?",
    "http://x?&&",
    "http://x#y?z",
    "http://x?a=1#b?c=2&d",
    "https://www.example.com/watch?v=dQw4w9WgXcQ&list=PL1&index=2&t=42s#comments",
    "mailto:someone@example.com?subject=hi&body=%26%3D",
    "not a url at all ? well=maybe & = #",
];

/// Number of `&`-separated entries between the first `?` and the first `#`,
/// or 0 if no `?` comes before the first `#`.
pub fn expected_count(url: &str) -> usize {
    let head = url.split('#').next().unwrap_or("");
    match head.split_once('?') {
        Some((_, query)) => query.matches('&').count() + 1,
        None => 0,
    }
}
