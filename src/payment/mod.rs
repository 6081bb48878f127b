//! Payment provider port.
//!
//! The checkout service only knows [`CheckoutProvider`]; the Stripe adapter
//! in [`stripe`] is the production implementation, and tests swap in a
//! recording mock.

pub mod stripe;

use async_trait::async_trait;

use crate::error::IntakeError;

/// Everything the provider needs to open one hosted checkout session.
///
/// `unit_amount_minor` is an integer in the smallest currency unit; no
/// floating-point amount ever crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSpec {
    /// Product display name shown on the hosted payment page.
    pub product_name: String,
    /// Product description shown on the hosted payment page.
    pub product_description: String,
    /// ISO currency code, lowercase (e.g. `"usd"`).
    pub currency: String,
    /// Unit price in minor currency units.
    pub unit_amount_minor: i64,
    /// Number of units; the site sells one ticket per session.
    pub quantity: u32,
    /// Where the provider redirects after successful payment. May contain
    /// the provider's session-id placeholder token.
    pub success_url: String,
    /// Where the provider redirects if the buyer cancels.
    pub cancel_url: String,
    /// Ticket id, attached as session metadata for the confirmation webhook.
    pub ticket_id: String,
    /// Tier label, attached as session metadata.
    pub ticket_tier: String,
}

/// A created hosted-payment session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Provider-issued session identifier.
    pub id: String,
    /// URL to redirect the buyer to.
    pub url: String,
}

/// Hosted-payment session factory.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Opens exactly one session with the provider.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Payment`] on network failure or a non-2xx
    /// provider response. Calls are never retried here; the caller sees a
    /// 500 and may resubmit the whole request.
    async fn create_session(&self, spec: &SessionSpec) -> Result<CheckoutSession, IntakeError>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording mock provider for service- and handler-level tests.

    use std::sync::Mutex;

    use super::{CheckoutProvider, CheckoutSession, SessionSpec};
    use crate::error::IntakeError;
    use async_trait::async_trait;

    /// Records every spec it receives and returns a canned session.
    #[derive(Debug, Default)]
    pub struct MockProvider {
        /// Specs passed to `create_session`, in call order.
        pub calls: Mutex<Vec<SessionSpec>>,
        /// When `true`, every call fails with a payment error.
        pub fail: bool,
    }

    impl MockProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl CheckoutProvider for MockProvider {
        async fn create_session(
            &self,
            spec: &SessionSpec,
        ) -> Result<CheckoutSession, IntakeError> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(spec.clone());
            }
            if self.fail {
                return Err(IntakeError::Payment("mock provider down".to_string()));
            }
            Ok(CheckoutSession {
                id: "cs_test_123".to_string(),
                url: "https://checkout.example.test/cs_test_123".to_string(),
            })
        }
    }
}
