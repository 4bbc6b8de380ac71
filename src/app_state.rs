//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::WaitlistStore;
use crate::service::WaitlistService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Waitlist service for all business logic.
    pub waitlist_service: Arc<WaitlistService>,
}

impl AppState {
    /// Builds the state around a store constructed at startup.
    #[must_use]
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self {
            waitlist_service: Arc::new(WaitlistService::new(store)),
        }
    }
}
