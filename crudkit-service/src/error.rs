//! The closed error taxonomy produced by the CRUD service.

use crate::store::StoreError;
use crudkit_patch::PatchError;
use crudkit_types::RecordId;
use thiserror::Error;

/// Result type for service operations.
pub type CrudResult<T> = Result<T, CrudError>;

/// One variant per failed operation kind.
///
/// Each carries the record-type name, the external identifier where the
/// operation has one, and the underlying cause where a raw failure was
/// wrapped. Errors are constructed at the point of translation and
/// propagated unchanged to the caller, never retried or re-wrapped.
#[derive(Debug, Error)]
pub enum CrudError {
    /// No record exists with the given external identifier. Raised by the
    /// existence guard before any side-effecting operation runs.
    #[error("{record_type} not found: {guid}")]
    NotFound {
        record_type: &'static str,
        guid: RecordId,
    },

    /// Persisting a newly-stamped record failed.
    #[error("failed to create {record_type}")]
    CreateFailed {
        record_type: &'static str,
        #[source]
        source: StoreError,
    },

    /// A single-record lookup failed in the store.
    #[error("failed to find {record_type} {guid}")]
    FindFailed {
        record_type: &'static str,
        guid: RecordId,
        #[source]
        source: StoreError,
    },

    /// A bulk read failed, either opening the stream or mid-traversal.
    #[error("failed to retrieve {record_type} records")]
    RetrieveFailed {
        record_type: &'static str,
        #[source]
        source: StoreError,
    },

    /// Re-persisting an updated record failed.
    #[error("failed to update {record_type} {guid}")]
    UpdateFailed {
        record_type: &'static str,
        guid: RecordId,
        #[source]
        source: StoreError,
    },

    /// The caller-supplied delete side effect failed.
    #[error("failed to delete {record_type} {guid}")]
    DeleteFailed {
        record_type: &'static str,
        guid: RecordId,
        #[source]
        source: StoreError,
    },

    /// A patch document could not be applied to the resource: malformed
    /// patch, bad path, type mismatch, or a failed `test` assertion. Fatal
    /// and non-retryable, since the client request itself is malformed.
    #[error("invalid patch for {resource_type} {guid}")]
    PatchInvalid {
        resource_type: String,
        guid: RecordId,
        #[source]
        source: PatchError,
    },
}
