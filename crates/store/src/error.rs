use thiserror::Error;

/// Persistence-layer error.
///
/// Keep this focused on infrastructure faults; domain failures (validation,
/// not-found) are expressed by the callers' types, not here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness constraint was violated.
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// Any other unexpected backend fault.
    #[error("storage fault: {0}")]
    Backend(String),
}
