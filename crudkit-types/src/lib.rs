//! Core type definitions for the CRUD support layer.
//!
//! This crate defines the fundamental, domain-agnostic types used by the
//! record service core:
//! - Caller-visible record identifiers (random UUID v4)
//! - Millisecond-precision wall-clock timestamps
//!
//! Domain-specific record shapes belong to the callers of the service,
//! not here.

mod ids;
mod timestamp;

pub use ids::RecordId;
pub use timestamp::Timestamp;
