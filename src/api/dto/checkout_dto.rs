//! Checkout endpoint DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/tickets/checkout`.
///
/// `ticket_id` is optional at the schema level so its absence produces the
/// endpoint's own 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Tier identifier to purchase.
    #[serde(default)]
    pub ticket_id: Option<String>,
    /// Locale for the redirect URLs; falls back to the configured default.
    #[serde(default)]
    pub locale: Option<String>,
}

/// Success body: the provider-hosted payment page to redirect to.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    /// Checkout session URL.
    pub url: String,
}
