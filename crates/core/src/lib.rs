//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! record identifiers, the field-rule schema engine, and the resource
//! descriptor trait the persistence and HTTP layers are generic over.

pub mod error;
pub mod id;
pub mod resource;
pub mod schema;

pub use error::{InvalidRecordId, ValidationErrors};
pub use id::RecordId;
pub use resource::Resource;
pub use schema::{FieldMap, FieldRule, FieldType, Schema};
