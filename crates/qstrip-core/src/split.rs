//! Separator split that keeps a trailing empty component.

/// Splits `s` on every occurrence of `sep`, keeping a final empty component
/// when `s` ends with `sep`.
///
/// - `split_keep_trailing("a&", "&")` → `["a", ""]`
/// - `split_keep_trailing("", "&")` → `[""]`
/// - `split_keep_trailing("a&b&c", "&")` → `["a", "b", "c"]`
///
/// An empty `sep` never matches, so the whole input comes back as a single
/// component.
pub fn split_keep_trailing<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        return vec![s];
    }

    let mut out = Vec::new();
    let mut start = 0;
    while let Some(pos) = s[start..].find(sep) {
        out.push(&s[start..start + pos]);
        start += pos + sep.len();
    }
    // whatever follows the last separator, possibly empty
    out.push(&s[start..]);
    out
}
