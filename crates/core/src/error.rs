//! Domain error model.

use thiserror::Error;

/// Ordered, non-empty list of field-level validation messages.
///
/// Validation collects every violation in one pass; this type is only
/// constructed with at least one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub(crate) fn new(messages: Vec<String>) -> Self {
        debug_assert!(!messages.is_empty());
        Self(messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "validation failed: {}", self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A string failed to parse as a record identifier.
///
/// Read paths treat this as "record absent" rather than a distinct error
/// class; the type exists so the parse site stays explicit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid record identifier: {0}")]
pub struct InvalidRecordId(pub String);
