//! Application state

use registrar_audit::AuditWorker;
use registrar_engine::EnrollmentEngine;
use registrar_store::Store;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub engine: EnrollmentEngine,
    pub audit: Arc<AuditWorker>,
}

impl AppState {
    /// Wire a fresh store, audit worker and engine. The worker is not started.
    pub fn new(audit_buffer: usize) -> Self {
        let store = Arc::new(Store::new());
        let audit = Arc::new(AuditWorker::new(audit_buffer));
        let engine = EnrollmentEngine::new(store.clone(), audit.clone());

        Self {
            store,
            engine,
            audit,
        }
    }
}
