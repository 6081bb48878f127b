//! Checkout session initiation: availability gate, then one provider call.

use std::fmt;
use std::sync::Arc;

use crate::error::IntakeError;
use crate::payment::{CheckoutProvider, SessionSpec};
use crate::store::TicketStore;

/// Product description embedded in every checkout session.
const EVENT_DESCRIPTION: &str =
    "Mexico in Silicon Valley Conference 2026 - February 21-22 at Stanford University";

/// Validates a purchase request against the catalog and opens a hosted
/// payment session.
///
/// The `sold < quantity` check is advisory: nothing is reserved or
/// decremented here, so no lock is needed. True inventory accounting belongs
/// to the payment-confirmation webhook downstream.
#[derive(Clone)]
pub struct CheckoutService {
    tickets: Arc<dyn TicketStore>,
    provider: Arc<dyn CheckoutProvider>,
    site_url: String,
    currency: String,
    default_locale: String,
}

impl fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutService")
            .field("site_url", &self.site_url)
            .field("currency", &self.currency)
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

impl CheckoutService {
    /// Creates a service over the given catalog and payment provider.
    #[must_use]
    pub fn new(
        tickets: Arc<dyn TicketStore>,
        provider: Arc<dyn CheckoutProvider>,
        site_url: String,
        currency: String,
        default_locale: String,
    ) -> Self {
        Self {
            tickets,
            provider,
            site_url: site_url.trim_end_matches('/').to_string(),
            currency,
            default_locale,
        }
    }

    /// Initiates a checkout for one ticket, returning the provider's
    /// redirect URL.
    ///
    /// Validation short-circuits before any provider call: missing id, then
    /// existence, then `active`, then remaining capacity.
    ///
    /// # Errors
    ///
    /// - [`IntakeError::MissingTicketId`] when `ticket_id` is absent.
    /// - [`IntakeError::TicketNotFound`] when no such tier exists.
    /// - [`IntakeError::TicketUnavailable`] when the tier is inactive.
    /// - [`IntakeError::TicketSoldOut`] when `sold >= quantity`.
    /// - [`IntakeError::Store`] / [`IntakeError::Payment`] on backend failure.
    pub async fn initiate(
        &self,
        ticket_id: Option<&str>,
        locale: Option<&str>,
    ) -> Result<String, IntakeError> {
        let ticket_id = match ticket_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(IntakeError::MissingTicketId),
        };
        let locale = locale.unwrap_or(&self.default_locale);

        let ticket = self
            .tickets
            .get(ticket_id)
            .await?
            .ok_or_else(|| IntakeError::TicketNotFound(ticket_id.to_string()))?;

        if !ticket.active {
            return Err(IntakeError::TicketUnavailable(ticket.id));
        }
        if ticket.is_sold_out() {
            return Err(IntakeError::TicketSoldOut(ticket.id));
        }

        let spec = SessionSpec {
            product_name: format!("MXSV 2026 - {} Ticket", ticket.tier),
            product_description: EVENT_DESCRIPTION.to_string(),
            currency: self.currency.clone(),
            unit_amount_minor: ticket.price_minor_units,
            quantity: 1,
            // The placeholder is substituted by the provider at redirect
            // time, so it is passed through literally.
            success_url: format!(
                "{}/{locale}/success?session_id={{CHECKOUT_SESSION_ID}}",
                self.site_url
            ),
            cancel_url: format!("{}/{locale}#tickets", self.site_url),
            ticket_id: ticket.id.clone(),
            ticket_tier: ticket.tier.clone(),
        };

        let session = self.provider.create_session(&spec).await?;
        tracing::info!(ticket_id = %ticket.id, session_id = %session.id, %locale, "checkout session created");
        Ok(session.url)
    }
}
