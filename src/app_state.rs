//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{CheckoutService, InterestService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Interest registry service.
    pub interest: Arc<InterestService>,
    /// Checkout session initiator.
    pub checkout: Arc<CheckoutService>,
}
