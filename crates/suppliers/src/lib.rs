//! Suppliers domain module.
//!
//! This crate contains the supplier record type and its field rules,
//! implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage).

pub mod supplier;

pub use supplier::Supplier;
