//! Record capability model for the CRUD support core.
//!
//! Defines the contracts a caller-supplied record type must provide so the
//! service can stamp identity and timestamps without any knowledge of the
//! record's domain fields:
//! - [`Record`] — accessors for identity, external ID, attribution, timestamps
//! - [`RecordBuilder`] — chainable setters plus a terminal `build`
//!
//! The pairing is deliberately reflection-free: the service works purely
//! through these traits, and every record type names its own builder via an
//! associated type.

mod record;

pub use record::{Record, RecordBuilder};
