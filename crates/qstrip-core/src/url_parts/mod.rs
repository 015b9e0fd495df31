//! URL query-segment engine.
//!
//! Splits an arbitrary (possibly malformed) URL string into the part before
//! the query, the individual raw query entries, and the fragment; removes
//! entries; and joins the remaining parts back together.
//!
//! Parsing never fails. Joining an unmodified parse reproduces the input
//! byte for byte.

mod join;
mod parse;
mod queries;

pub use queries::RemoveTarget;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A URL split around its query region.
///
/// For `http://x?a=1&ref#top`: `pre_query` is `http://x`, `queries` is
/// `["a=1", "ref"]`, `post_query` is `#top`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlParts {
    pre_query: String,
    queries: Vec<String>,
    post_query: String,
}

impl UrlParts {
    /// Everything before the delimiting `?` (or before the fragment if there
    /// is no query).
    pub fn pre_query(&self) -> &str {
        &self.pre_query
    }

    /// Raw query entries in original order, neither decoded nor validated.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// The fragment including its leading `#`, or empty.
    pub fn post_query(&self) -> &str {
        &self.post_query
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl FromStr for UrlParts {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UrlParts::parse(s))
    }
}
