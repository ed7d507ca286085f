//! The CRUD service core.
//!
//! Every operation follows the same shape: existence guard where the
//! operation targets a single record, the domain step (stamping for
//! create/update, passthrough for reads and deletes), one store call, and
//! uniform error translation. The service is stateless across calls.

use crate::error::{CrudError, CrudResult};
use crate::store::{RecordStore, StoreError, StoreResult};
use crudkit_model::{Record, RecordBuilder};
use crudkit_patch::{PatchDocument, PatchError};
use crudkit_types::{RecordId, Timestamp};
use futures::stream::{BoxStream, StreamExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// A failure surfaced inside an operation pipeline, before translation.
enum Failure {
    /// Already one of the service's typed errors; passes through unchanged.
    Typed(CrudError),
    /// A raw store failure awaiting operation-specific wrapping.
    Store(StoreError),
}

impl From<CrudError> for Failure {
    fn from(err: CrudError) -> Self {
        Self::Typed(err)
    }
}

impl From<StoreError> for Failure {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Wraps a raw store failure into the operation's error kind; an
/// already-typed error propagates unchanged, so the guard's not-found
/// never gets double-wrapped by the operation that invoked it.
fn translate<T>(
    result: Result<T, Failure>,
    wrap: impl FnOnce(StoreError) -> CrudError,
) -> CrudResult<T> {
    result.map_err(|failure| match failure {
        Failure::Typed(err) => err,
        Failure::Store(cause) => {
            let err = wrap(cause);
            warn!("{err}");
            err
        }
    })
}

/// Generic CRUD support over a [`RecordStore`].
///
/// `R` is the caller's record type; the service touches only the metadata
/// exposed through the [`Record`] and [`RecordBuilder`] capability traits
/// and treats domain fields as opaque.
pub struct CrudService<R, S> {
    store: Arc<S>,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> Clone for CrudService<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<R, S> CrudService<R, S>
where
    R: Record,
    S: RecordStore<R>,
{
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// The shared store handle.
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Stamps and persists a new record.
    ///
    /// The builder arrives with domain fields only. A fresh random external
    /// identifier is assigned, and creation and modification timestamps are
    /// both set to one captured "now".
    pub async fn create(&self, builder: R::Builder) -> CrudResult<R> {
        let result = async {
            let now = Timestamp::now();
            let record = builder
                .guid(RecordId::new())
                .created_on(now)
                .modified_on(now)
                .build();
            Ok::<_, Failure>(self.store.save(record).await?)
        }
        .await;
        let record = translate(result, |cause| CrudError::CreateFailed {
            record_type: R::type_name(),
            source: cause,
        })?;
        debug!("created {} {}", R::type_name(), record.guid());
        Ok(record)
    }

    /// Looks up one record, failing with `NotFound` when absent.
    pub async fn find_one(&self, guid: RecordId) -> CrudResult<R> {
        let result = self.guarded_find(guid).await;
        translate(result, |cause| CrudError::FindFailed {
            record_type: R::type_name(),
            guid,
            source: cause,
        })
    }

    /// Streams all records. The stream is lazy and unbuffered; each call
    /// yields an independent traversal.
    pub async fn find_all(&self) -> CrudResult<BoxStream<'static, CrudResult<R>>> {
        let wrap = |cause: StoreError| CrudError::RetrieveFailed {
            record_type: R::type_name(),
            source: cause,
        };
        let stream = match self.store.find_all().await {
            Ok(stream) => stream,
            Err(cause) => {
                let err = wrap(cause);
                warn!("{err}");
                return Err(err);
            }
        };
        Ok(stream.map(move |item| item.map_err(wrap)).boxed())
    }

    /// Applies a caller-supplied transform to an existing record and
    /// persists the result.
    ///
    /// The transform yields a builder with updated domain fields; the
    /// service then overwrites identity, external identifier, attribution,
    /// and creation timestamp with the original record's values, so the
    /// caller cannot mutate immutable metadata, and sets the modification
    /// timestamp strictly after the original.
    pub async fn update<F>(&self, guid: RecordId, transform: F) -> CrudResult<R>
    where
        F: FnOnce(&R) -> R::Builder + Send,
    {
        let result = async {
            let existing = self.guarded_find(guid).await?;
            let record = transform(&existing)
                .id(existing.id())
                .guid(existing.guid())
                .created_by(existing.created_by())
                .created_on(existing.created_on())
                .modified_by(existing.modified_by())
                .modified_on(existing.modified_on().next_after())
                .build();
            Ok::<_, Failure>(self.store.save(record).await?)
        }
        .await;
        let record = translate(result, |cause| CrudError::UpdateFailed {
            record_type: R::type_name(),
            guid,
            source: cause,
        })?;
        debug!("updated {} {}", R::type_name(), guid);
        Ok(record)
    }

    /// Runs a caller-supplied delete side effect against an existing
    /// record. The guard fires first, so the side effect never runs for a
    /// nonexistent record.
    pub async fn delete<F, Fut>(&self, guid: RecordId, side_effect: F) -> CrudResult<()>
    where
        F: FnOnce(R) -> Fut + Send,
        Fut: Future<Output = StoreResult<()>> + Send,
    {
        let result = async {
            let existing = self.guarded_find(guid).await?;
            side_effect(existing).await?;
            Ok::<_, Failure>(())
        }
        .await;
        translate(result, |cause| CrudError::DeleteFailed {
            record_type: R::type_name(),
            guid,
            source: cause,
        })?;
        debug!("deleted {} {}", R::type_name(), guid);
        Ok(())
    }

    /// Applies a patch document to a typed resource.
    ///
    /// The resource converts to a JSON tree through one serialization
    /// contract shared by every resource type, the document applies in
    /// order (all-or-nothing), and the result converts back. Any
    /// conversion or application failure wraps once into `PatchInvalid`
    /// with the resource-type name and the identifier for diagnostics.
    pub fn apply_patch<T>(
        &self,
        guid: RecordId,
        patch: &PatchDocument,
        resource: &T,
    ) -> CrudResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let result: Result<T, PatchError> = serde_json::to_value(resource)
            .map_err(PatchError::from)
            .and_then(|tree| patch.apply(&tree))
            .and_then(|patched| serde_json::from_value(patched).map_err(PatchError::from));
        result.map_err(|cause| {
            let err = CrudError::PatchInvalid {
                resource_type: short_type_name::<T>(),
                guid,
                source: cause,
            };
            warn!("{err}");
            err
        })
    }

    /// Existence guard: resolves a record by its external identifier or
    /// fails with the typed not-found error before any further step of the
    /// calling operation runs.
    async fn guarded_find(&self, guid: RecordId) -> Result<R, Failure> {
        match self.store.find_by_guid(guid).await? {
            Some(record) => Ok(record),
            None => Err(CrudError::NotFound {
                record_type: R::type_name(),
                guid,
            }
            .into()),
        }
    }
}

/// Last path segment of a type name, e.g. `my_api::NoteResource` → `NoteResource`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full).to_string()
}
