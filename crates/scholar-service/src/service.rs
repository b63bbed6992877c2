//! StudentService: the coordinator between RPC handlers, the record cache
//! and the store.
//!
//! Consistency policy:
//! - Reads go to the cache first. A cached record is authoritative and the
//!   store is not consulted; records are never updated, so the cache cannot
//!   be stale.
//! - On a cache miss the store is read. A store hit warms the cache unless
//!   [`ServiceConfig::warm_cache_on_read`] is off.
//! - `register` of an id that already exists anywhere is a successful no-op.
//!   New records are written to the store first and cached only once the
//!   store confirms the insert.

use std::sync::Arc;

use scholar_core::{RegisterResp, Student, StudentId};
use scholar_storage::{InsertOutcome, StudentStore, UserRow};

use crate::cache::RecordCache;
use crate::error::ServiceError;

/// Tunables for [`StudentService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Populate the cache when a lookup misses the cache but hits the store.
    pub warm_cache_on_read: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            warm_cache_on_read: true,
        }
    }
}

/// Outcome of a record lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Student),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Implements the `Register` and `Query` operations.
///
/// The cache and store are injected so their lifetime is owned by whoever
/// builds the service (the server state, or a test).
pub struct StudentService {
    cache: Arc<RecordCache>,
    store: Arc<dyn StudentStore>,
    config: ServiceConfig,
}

impl StudentService {
    /// Creates a service with the default [`ServiceConfig`].
    pub fn new(store: Arc<dyn StudentStore>, cache: Arc<RecordCache>) -> Self {
        Self::with_config(store, cache, ServiceConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn StudentStore>,
        cache: Arc<RecordCache>,
        config: ServiceConfig,
    ) -> Self {
        StudentService {
            cache,
            store,
            config,
        }
    }

    pub fn cache(&self) -> &Arc<RecordCache> {
        &self.cache
    }

    /// Registers `student` unless a record with its id already exists.
    ///
    /// Returns success both when the record is created and when it already
    /// existed. Store errors are returned unchanged; nothing is retried.
    pub fn register(&self, student: Student) -> Result<RegisterResp, ServiceError> {
        tracing::info!("register req: {}", student);

        if self.lookup(student.id)?.is_found() {
            tracing::debug!("student {} already registered, skipping write", student.id);
            return Ok(RegisterResp::ok());
        }

        match self.store.create_user(&UserRow::from(&student))? {
            InsertOutcome::Inserted => {
                self.cache.put(student.id, student);
            }
            InsertOutcome::AlreadyExists => {
                tracing::info!(
                    "student {} was registered concurrently, first write kept",
                    student.id
                );
            }
        }

        Ok(RegisterResp::ok())
    }

    /// Looks up the record for `id`, cache first.
    pub fn query(&self, id: StudentId) -> Result<Lookup, ServiceError> {
        tracing::info!("query req: id={}", id);
        self.lookup(id)
    }

    fn lookup(&self, id: StudentId) -> Result<Lookup, ServiceError> {
        if let Some(student) = self.cache.get(id) {
            return Ok(Lookup::Found(student));
        }

        let Some(row) = self.store.query_user(id)? else {
            return Ok(Lookup::NotFound);
        };

        let student = Student::from(row);
        if self.config.warm_cache_on_read {
            self.cache.put(id, student.clone());
        }
        Ok(Lookup::Found(student))
    }
}

/// Runs `op` against `service` on tokio's blocking thread pool.
///
/// Store calls are synchronous and may hold a lock across SQLite I/O, so
/// async callers go through here rather than calling the service on a
/// runtime worker.
pub async fn run_blocking<T, F>(service: &Arc<StudentService>, op: F) -> Result<T, ServiceError>
where
    T: Send + 'static,
    F: FnOnce(&StudentService) -> Result<T, ServiceError> + Send + 'static,
{
    let service = Arc::clone(service);
    tokio::task::spawn_blocking(move || op(&service)).await?
}
