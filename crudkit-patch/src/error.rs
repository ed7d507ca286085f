//! Error types for patch application.

use thiserror::Error;

/// Result type for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while parsing or applying a patch document.
///
/// Every variant names the offending pointer so callers can report which
/// operation of the document failed.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The pointer is not valid RFC 6901 syntax.
    #[error("invalid JSON pointer: {path:?}")]
    Parse { path: String },

    /// The pointer does not resolve to a value in the document.
    #[error("no value at path: {path:?}")]
    PathNotFound { path: String },

    /// An array index is past the end of the array.
    #[error("array index out of range: {path:?}")]
    IndexOutOfRange { path: String },

    /// A `test` operation's operand did not match the document.
    #[error("test failed at path: {path:?}")]
    TestFailed { path: String },

    /// A `move` operation would move a value into its own child.
    #[error("cannot move {from:?} into its own child {path:?}")]
    IllegalMove { from: String, path: String },

    /// Converting a resource to or from its tree representation failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
