//! Error types shared by the collection modules

use thiserror::Error;

/// Errors reported by the ordered map operations
///
/// Every variant is surfaced synchronously by the operation that detected
/// it; nothing is retried internally, and any held access mode is released
/// before the error reaches the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Insertion found a value comparing equal under the value ordering
    ///
    /// The tree is left exactly as it was before the call; callers that
    /// want insert-if-absent behavior should check `contains`/`try_get`
    /// first instead of treating this as control flow.
    #[error("an entry comparing equal is already present")]
    DuplicateKey,

    /// No stored value matched the supplied key
    ///
    /// Raised by `get` and `remove`; `try_get` and `contains` report the
    /// same condition through their return value and never fail.
    #[error("no entry matches the requested key")]
    NotFound,

    /// The ordering pair could not be synthesized at construction
    #[error("ordering configuration incomplete: {0}")]
    InvalidConfiguration(String),
}
