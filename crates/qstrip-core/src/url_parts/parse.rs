//! Tolerant segment splitter.

use super::UrlParts;
use crate::split::split_keep_trailing;

impl UrlParts {
    /// Splits `url` into pre-query, query entries and fragment.
    ///
    /// The first `#` always closes the window in which a query `?` is looked
    /// for, so a `?` inside the fragment is inert. Without a `?` in that
    /// window there are no entries at all; a bare trailing `?` yields one
    /// empty entry. No `%`-decoding is performed and every input parses.
    pub fn parse(url: &str) -> Self {
        let fragment_start = url.find('#').unwrap_or(url.len());
        let (head, post_query) = url.split_at(fragment_start);

        let (pre_query, queries) = match head.find('?') {
            Some(query_start) => {
                let entries = split_keep_trailing(&head[query_start + 1..], "&")
                    .into_iter()
                    .map(str::to_owned)
                    .collect();
                (&head[..query_start], entries)
            }
            None => (head, Vec::new()),
        };

        tracing::debug!(
            pre_query_len = pre_query.len(),
            queries = queries.len(),
            post_query_len = post_query.len(),
            "parsed url"
        );

        UrlParts {
            pre_query: pre_query.to_owned(),
            queries,
            post_query: post_query.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(url: &str) -> (String, Vec<String>, String) {
        let parts = UrlParts::parse(url);
        (
            parts.pre_query().to_owned(),
            parts.queries().to_vec(),
            parts.post_query().to_owned(),
        )
    }

    #[test]
    fn typical_url() {
        let (pre, queries, post) = segments("https://google.com/search?q=rust&ref#start");
        assert_eq!(pre, "https://google.com/search");
        assert_eq!(queries, ["q=rust", "ref"]);
        assert_eq!(post, "#start");
    }

    #[test]
    fn no_query() {
        let (pre, queries, post) = segments("http://x/path");
        assert_eq!(pre, "http://x/path");
        assert!(queries.is_empty());
        assert_eq!(post, "");
    }

    #[test]
    fn no_query_with_fragment() {
        let (pre, queries, post) = segments("http://x/path#frag");
        assert_eq!(pre, "http://x/path");
        assert!(queries.is_empty());
        assert_eq!(post, "#frag");
    }

    #[test]
    fn fragment_before_query() {
        let (pre, queries, post) = segments("http://x#y?z");
        assert_eq!(pre, "http://x");
        assert!(queries.is_empty());
        assert_eq!(post, "#y?z");
    }

    #[test]
    fn fragment_at_start() {
        let (pre, queries, post) = segments("#a?b=1");
        assert_eq!(pre, "");
        assert!(queries.is_empty());
        assert_eq!(post, "#a?b=1");
    }

    #[test]
    fn bare_question_mark_is_one_empty_entry() {
        let (pre, queries, post) = segments("http://x?");
        assert_eq!(pre, "http://x");
        assert_eq!(queries, [""]);
        assert_eq!(post, "");
    }

    #[test]
    fn empty_query_before_fragment() {
        let (_, queries, post) = segments("http://x?#f");
        assert_eq!(queries, [""]);
        assert_eq!(post, "#f");
    }

    #[test]
    fn only_first_question_mark_delimits() {
        let (pre, queries, _) = segments("http://x?a=?&b??");
        assert_eq!(pre, "http://x");
        assert_eq!(queries, ["a=?", "b??"]);
    }

    #[test]
    fn empty_entries_are_kept() {
        let (_, queries, _) = segments("http://x?&a&&");
        assert_eq!(queries, ["", "a", "", ""]);
    }

    #[test]
    fn only_first_hash_starts_fragment() {
        let (_, queries, post) = segments("http://x?a=1#b#c&d");
        assert_eq!(queries, ["a=1"]);
        assert_eq!(post, "#b#c&d");
    }

    #[test]
    fn empty_string() {
        let (pre, queries, post) = segments("");
        assert_eq!(pre, "");
        assert!(queries.is_empty());
        assert_eq!(post, "");
    }

    #[test]
    fn percent_encoding_is_untouched() {
        let (_, queries, _) = segments("http://x?q=a%26b%23c&r=%3D");
        assert_eq!(queries, ["q=a%26b%23c", "r=%3D"]);
    }
}
