use crudkit_types::{RecordId, Timestamp};

/// Capability contract for a persisted domain record.
///
/// A record carries an internal numeric identity (store-owned, absent until
/// first persistence), a caller-visible external identifier, creator/modifier
/// attribution, and creation/modification timestamps. Domain fields are
/// opaque to the service.
///
/// Invariants enforced by the service layer:
/// - `guid`, `created_by`, and `created_on` never change after first
///   persistence
/// - `modified_on` strictly increases on every update
pub trait Record: Clone + Send + Sync + 'static {
    /// The builder type that constructs this record.
    type Builder: RecordBuilder<Record = Self>;

    /// The record-type name carried into error diagnostics (e.g., "Note").
    fn type_name() -> &'static str;

    /// Internal numeric identity, `None` before first persistence.
    fn id(&self) -> Option<i64>;

    /// Caller-visible external identifier.
    fn guid(&self) -> RecordId;

    /// Who created the record.
    fn created_by(&self) -> &str;

    /// When the record was created.
    fn created_on(&self) -> Timestamp;

    /// Who last modified the record.
    fn modified_by(&self) -> &str;

    /// When the record was last modified.
    fn modified_on(&self) -> Timestamp;

    /// A builder pre-populated with all of this record's fields, domain and
    /// metadata alike. The update path starts from here and overwrites the
    /// immutable metadata afterwards.
    fn to_builder(&self) -> Self::Builder;
}

/// Chainable constructor for a [`Record`].
///
/// Each setter consumes and returns the builder; `build` terminally produces
/// the immutable record. Unset metadata fields take type-specific defaults.
pub trait RecordBuilder: Send + Sized {
    /// The record type this builder constructs.
    type Record: Record;

    /// Sets the internal numeric identity.
    fn id(self, id: Option<i64>) -> Self;

    /// Sets the external identifier.
    fn guid(self, guid: RecordId) -> Self;

    /// Sets the creator attribution.
    fn created_by(self, created_by: impl Into<String>) -> Self;

    /// Sets the creation timestamp.
    fn created_on(self, created_on: Timestamp) -> Self;

    /// Sets the modifier attribution.
    fn modified_by(self, modified_by: impl Into<String>) -> Self;

    /// Sets the modification timestamp.
    fn modified_on(self, modified_on: Timestamp) -> Self;

    /// Produces the immutable record.
    fn build(self) -> Self::Record;
}
