use axum::{Router, routing::get};

use stockroom_inventory::InventoryItem;
use stockroom_shipments::Shipment;
use stockroom_suppliers::Supplier;
use stockroom_transactions::Transaction;

pub mod crud;
pub mod system;

/// Router for all authenticated endpoints.
///
/// Every resource gets the same verb set from the generic CRUD handler;
/// only the descriptor type differs.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/api/inventory", crud::resource_routes::<InventoryItem>())
        .nest("/api/supplier", crud::resource_routes::<Supplier>())
        .nest("/api/shipment", crud::resource_routes::<Shipment>())
        .nest("/api/transaction", crud::resource_routes::<Transaction>())
}
