//! Resource descriptor: the seam the generic CRUD machinery is built over.

use crate::schema::Schema;

/// Descriptor for one persistable resource type.
///
/// Per-resource behavior lives in data (the collection name, the display
/// name, the field-rule table); everything operating on resources — the
/// persistence gateway and the HTTP handlers — is written once, generic
/// over this trait.
pub trait Resource: Send + Sync + 'static {
    /// Document collection the resource's records are stored in.
    const COLLECTION: &'static str;

    /// Name used in client-facing messages ("Supplier not found").
    const DISPLAY_NAME: &'static str;

    /// Field rules the resource's payloads are validated against.
    fn schema() -> &'static Schema;
}
