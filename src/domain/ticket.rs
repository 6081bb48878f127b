//! Ticket tier catalog record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named category of conference ticket with its own price and capacity.
///
/// `sold` counts confirmed purchases only; it is never mutated by this
/// service. Checkout-session creation is a reservation intent, and the
/// increment happens in the payment-confirmation webhook, which lives
/// outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TicketTier {
    /// Unique tier identifier (e.g. `"early"`).
    pub id: String,
    /// Category label used in the checkout product name.
    pub tier: String,
    /// Price in the smallest currency unit (cents). Integer by construction
    /// so no floating-point amount ever reaches the payment provider.
    pub price_minor_units: i64,
    /// Total allocated units for this tier.
    pub quantity: u32,
    /// Count of confirmed purchases attributed to this tier.
    pub sold: u32,
    /// Inactive tiers cannot be purchased even with capacity remaining.
    pub active: bool,
}

impl TicketTier {
    /// Units still available for purchase. Saturates at zero if `sold`
    /// ever overshoots `quantity`.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.sold)
    }

    /// Returns `true` when every allocated unit has been sold.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.sold >= self.quantity
    }
}
