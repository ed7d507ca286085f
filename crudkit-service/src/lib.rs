//! Generic CRUD support core for record services.
//!
//! Mediates between a web-facing handler and a record store, providing:
//! - identity and timestamp stamping on create and update
//! - an existence guard enforced before every mutation or single-record
//!   lookup
//! - JSON patch application against typed resources
//! - uniform translation of store failures into a closed, typed error
//!   taxonomy
//!
//! The core holds no state across calls: every operation is independent,
//! issues at most one outstanding store call at a time, and takes no locks.
//! Cancellation is cooperative: dropping an operation's future drops the
//! in-flight store call, and no partial mutation can be observed because
//! every write is a single `save` of a fully-built record. Failures are
//! never retried internally.

mod error;
mod memory;
mod service;
mod store;

pub use error::{CrudError, CrudResult};
pub use memory::MemoryStore;
pub use service::CrudService;
pub use store::{RecordStore, RecordStream, StoreError, StoreResult};
