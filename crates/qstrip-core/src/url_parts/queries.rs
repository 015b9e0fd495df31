//! Query list: counting, naming and removing entries.

use super::UrlParts;
use crate::error::QueryError;
use serde::{Deserialize, Serialize};

/// Which entries to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoveTarget {
    /// The entry at this position; later entries shift down by one.
    Index(usize),
    /// Every entry.
    All,
}

impl UrlParts {
    /// Number of query entries (0 when the URL has no query).
    pub fn count(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Name of entry `index`: the text before its first `=`, or the whole
    /// entry when it has none. May be empty (`=v`, or an empty entry).
    pub fn name_of(&self, index: usize) -> Result<&str, QueryError> {
        let entry = self.entry(index)?;
        Ok(entry.split_once('=').map_or(entry, |(name, _)| name))
    }

    /// Names of all entries, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.queries
            .iter()
            .map(|entry| entry.split_once('=').map_or(entry.as_str(), |(name, _)| name))
    }

    /// Removes one entry or all of them. Entries are never reordered.
    pub fn remove(&mut self, target: RemoveTarget) -> Result<(), QueryError> {
        match target {
            RemoveTarget::All => {
                tracing::debug!(removed = self.queries.len(), "removing all queries");
                self.queries.clear();
            }
            RemoveTarget::Index(index) => {
                self.entry(index)?;
                let removed = self.queries.remove(index);
                tracing::debug!(index, entry = %removed, "removed query");
            }
        }
        Ok(())
    }

    fn entry(&self, index: usize) -> Result<&str, QueryError> {
        match self.queries.get(index) {
            Some(entry) => Ok(entry),
            None => {
                let len = self.queries.len();
                tracing::warn!(index, len, "query index out of range");
                Err(QueryError::IndexOutOfRange { index, len })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_entries() {
        assert_eq!(UrlParts::parse("http://x").count(), 0);
        assert_eq!(UrlParts::parse("http://x?").count(), 1);
        assert_eq!(UrlParts::parse("http://x?a&b=2&").count(), 3);
        assert_eq!(UrlParts::parse("http://x#?a&b").count(), 0);
        assert!(UrlParts::parse("http://x").is_empty());
    }

    #[test]
    fn name_without_equals_is_whole_entry() {
        let parts = UrlParts::parse("http://x?ref");
        assert_eq!(parts.name_of(0), Ok("ref"));
    }

    #[test]
    fn name_before_first_equals() {
        let parts = UrlParts::parse("http://x?a=1&b=c=d&=v&");
        assert_eq!(parts.name_of(0), Ok("a"));
        assert_eq!(parts.name_of(1), Ok("b"));
        assert_eq!(parts.name_of(2), Ok(""));
        assert_eq!(parts.name_of(3), Ok(""));
        assert_eq!(parts.names().collect::<Vec<_>>(), ["a", "b", "", ""]);
    }

    #[test]
    fn name_of_out_of_range() {
        let parts = UrlParts::parse("http://x?a=1");
        assert_eq!(
            parts.name_of(1),
            Err(QueryError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            UrlParts::parse("http://x").name_of(0),
            Err(QueryError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn remove_one_shifts_later_entries() {
        let mut parts = UrlParts::parse("http://x?a=1&b=2&c=3");
        parts.remove(RemoveTarget::Index(1)).unwrap();
        assert_eq!(parts.queries(), ["a=1", "c=3"]);
        assert_eq!(parts.name_of(1), Ok("c"));
    }

    #[test]
    fn remove_all_clears() {
        let mut parts = UrlParts::parse("http://x?a=1&b=2#f");
        parts.remove(RemoveTarget::All).unwrap();
        assert_eq!(parts.count(), 0);
        assert_eq!(parts.post_query(), "#f");
    }

    #[test]
    fn remove_all_on_empty_is_ok() {
        let mut parts = UrlParts::parse("http://x");
        parts.remove(RemoveTarget::All).unwrap();
        assert_eq!(parts.count(), 0);
    }

    #[test]
    fn remove_out_of_range_leaves_entries_alone() {
        let mut parts = UrlParts::parse("http://x?a&b");
        let err = parts.remove(RemoveTarget::Index(2)).unwrap_err();
        assert_eq!(err, QueryError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(parts.queries(), ["a", "b"]);
    }

    #[test]
    fn stale_index_after_removal_fails() {
        let mut parts = UrlParts::parse("http://x?a&b");
        parts.remove(RemoveTarget::Index(1)).unwrap();
        assert!(parts.remove(RemoveTarget::Index(1)).is_err());
    }
}
