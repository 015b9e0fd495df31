//! Reconstruction of a URL string from its parts.

use super::UrlParts;

impl UrlParts {
    /// Joins the parts back into one string: `?` before the first entry,
    /// `&` before each later one. No `?` is written when there are no
    /// entries, so `url?` (one empty entry) and `url` stay distinct.
    pub fn join(&self) -> String {
        let capacity = self.pre_query.len()
            + self.queries.iter().map(|q| q.len() + 1).sum::<usize>()
            + self.post_query.len();
        let mut out = String::with_capacity(capacity);

        out.push_str(&self.pre_query);
        for (i, query) in self.queries.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(query);
        }
        out.push_str(&self.post_query);
        out
    }
}
