//! Shipments domain module.
//!
//! This crate contains the shipment record type and its field rules,
//! implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage).

pub mod shipment;

pub use shipment::{Shipment, ShipmentStatus};
