use std::sync::Arc;

use sqlx::PgPool;

use stockroom_core::Resource;
use stockroom_store::{DocumentStore, Gateway, InMemoryDocumentStore, PostgresDocumentStore};

/// Shared application services: the document store every gateway runs over.
///
/// The store is selected once at startup and injected here; nothing reads
/// ambient/global connection state.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
}

impl AppServices {
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
        }
    }

    /// Persistence gateway for one resource.
    pub fn gateway<R: Resource>(&self) -> Gateway<R, Arc<dyn DocumentStore>> {
        Gateway::new(self.store.clone())
    }
}

pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        build_persistent_services().await
    } else {
        AppServices::in_memory()
    }
}

async fn build_persistent_services() -> AppServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set when USE_PERSISTENT_STORE=true");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let store = PostgresDocumentStore::new(pool);
    store
        .ensure_schema()
        .await
        .expect("failed to create documents schema");

    AppServices {
        store: Arc::new(store),
    }
}
