//! Application state shared by the RPC handlers.

use std::sync::Arc;

use scholar_storage::{InMemoryStore, SqliteStore, StudentStore};

use crate::cache::RecordCache;
use crate::config::ServiceArgs;
use crate::error::ServiceError;
use crate::service::{ServiceConfig, StudentService};

/// Shared application state for the RPC server.
///
/// `StudentService` takes `&self` everywhere, so it is shared as a plain
/// `Arc` with no outer lock; concurrency is handled by the cache and store.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StudentService>,
}

impl AppState {
    pub fn new(service: Arc<StudentService>) -> Self {
        AppState { service }
    }

    /// Builds the store selected by `args` and a fresh cache around it.
    pub fn from_args(args: &ServiceArgs) -> Result<Self, ServiceError> {
        let store: Arc<dyn StudentStore> = if args.in_memory {
            Arc::new(InMemoryStore::new())
        } else {
            Arc::new(SqliteStore::new(&args.db_path)?)
        };
        let config = ServiceConfig {
            warm_cache_on_read: !args.cold_reads,
        };
        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: Arc<dyn StudentStore>, config: ServiceConfig) -> Self {
        let cache = Arc::new(RecordCache::new());
        AppState::new(Arc::new(StudentService::with_config(store, cache, config)))
    }

    /// Creates a new `AppState` with an in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), ServiceConfig::default())
    }
}
