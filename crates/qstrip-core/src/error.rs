//! Engine error type.

use thiserror::Error;

/// Failure raised by the query list when a caller passes an index that is
/// not currently valid. Indices must be re-derived from a fresh parse after
/// every removal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query index {index} out of range (url has {len} queries)")]
    IndexOutOfRange { index: usize, len: usize },
}
