//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::FinanceStore;
use crate::infra::InMemoryStore;

use super::service::FinanceService;

/// Shared application state for the Axum web server.
///
/// Owns the store for the process lifetime. Handlers receive it by
/// injection, so each test can build a fresh one.
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(AppState::seeded());
///
/// let router = Router::new()
///     .route("/users", get(list_users_handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The service containing the finance use cases.
    pub service: Arc<FinanceService>,

    /// Backing store for users, transactions and articles.
    pub store: Arc<dyn FinanceStore>,
}

impl AppState {
    /// Creates a new `AppState` around the provided store.
    #[must_use]
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        let service = Arc::new(FinanceService::new(Arc::clone(&store)));
        Self { service, store }
    }

    /// Creates state backed by an in-memory store holding the seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryStore::seeded()))
    }
}
