//! Stripe Checkout adapter.
//!
//! Talks to the Stripe REST API directly with [`reqwest`]: one form-encoded
//! `POST /v1/checkout/sessions` per purchase attempt, authenticated with the
//! secret key as a bearer token. The API base is configurable so tests can
//! point at a local stub.

use async_trait::async_trait;
use serde::Deserialize;

use super::{CheckoutProvider, CheckoutSession, SessionSpec};
use crate::error::IntakeError;

/// Stripe hosted-checkout client.
#[derive(Debug, Clone)]
pub struct StripeCheckout {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

/// The fields we read from Stripe's session object.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: String,
}

impl StripeCheckout {
    /// Creates a client against the given API base (normally
    /// `https://api.stripe.com`).
    #[must_use]
    pub fn new(api_base: String, secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            secret_key,
        }
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: reqwest::Client, api_base: String, secret_key: String) -> Self {
        Self {
            client,
            api_base,
            secret_key,
        }
    }

    /// Flattens a [`SessionSpec`] into Stripe's bracketed form parameters.
    fn form_params(spec: &SessionSpec) -> Vec<(&'static str, String)> {
        vec![
            ("mode", "payment".to_string()),
            ("payment_method_types[0]", "card".to_string()),
            (
                "line_items[0][price_data][currency]",
                spec.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                spec.product_name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]",
                spec.product_description.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                spec.unit_amount_minor.to_string(),
            ),
            ("line_items[0][quantity]", spec.quantity.to_string()),
            ("success_url", spec.success_url.clone()),
            ("cancel_url", spec.cancel_url.clone()),
            ("metadata[ticketId]", spec.ticket_id.clone()),
            ("metadata[ticketTier]", spec.ticket_tier.clone()),
        ]
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(&self, spec: &SessionSpec) -> Result<CheckoutSession, IntakeError> {
        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&Self::form_params(spec))
            .send()
            .await
            .map_err(|e| IntakeError::Payment(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntakeError::Payment(format!(
                "stripe returned {status}: {body}"
            )));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| IntakeError::Payment(format!("invalid session response: {e}")))?;

        tracing::debug!(session_id = %session.id, "checkout session created");
        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }
}
