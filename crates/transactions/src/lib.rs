//! Transactions domain module.
//!
//! This crate contains the transaction record type and its field rules,
//! implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage).

pub mod transaction;

pub use transaction::{Transaction, TransactionType};
