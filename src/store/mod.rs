//! Storage ports for the ticket catalog and the interest registry.
//!
//! Handlers never touch a backend directly; services hold these traits as
//! `Arc<dyn …>` so the Postgres adapters and the in-memory adapters are
//! interchangeable. The in-memory pair backs tests and database-less
//! deployments.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{InterestSubmission, TicketTier, UpsertOutcome};
use crate::error::IntakeError;

/// Read-only ticket tier catalog.
///
/// Deliberately has no write operation: `sold` is incremented by the
/// payment-confirmation webhook outside this service, never at
/// checkout-session time.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Looks up a tier by identifier. `Ok(None)` means no such tier.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Store`] if the backend fails.
    async fn get(&self, id: &str) -> Result<Option<TicketTier>, IntakeError>;
}

/// Interest registry with idempotent-by-email writes.
#[async_trait]
pub trait InterestStore: Send + Sync {
    /// Inserts a new record for an unseen email, or updates the existing
    /// record in place for a repeat email.
    ///
    /// Implementations must make the lookup-then-write atomic so two
    /// concurrent first submissions with the same email cannot both create.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Store`] if the backend fails.
    async fn upsert_by_email(
        &self,
        submission: &InterestSubmission,
    ) -> Result<UpsertOutcome, IntakeError>;

    /// Total number of interest records.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Store`] if the backend fails.
    async fn count(&self) -> Result<u64, IntakeError>;
}
