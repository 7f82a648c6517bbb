//! `stockroom-store` — document persistence.
//!
//! One collection per resource, keyed by generated record identifiers.
//! The [`DocumentStore`] trait hides the backend: an in-memory map for
//! dev/test and a Postgres JSONB table for production. [`Gateway`] layers
//! per-resource create/find/update/delete semantics on top.

pub mod document;
pub mod document_store;
pub mod error;
pub mod gateway;
pub mod postgres;

pub use document::Document;
pub use document_store::{DocumentStore, InMemoryDocumentStore};
pub use error::StoreError;
pub use gateway::Gateway;
pub use postgres::PostgresDocumentStore;
