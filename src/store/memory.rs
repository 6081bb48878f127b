//! In-memory store adapters.
//!
//! Both adapters keep a single `tokio::sync::RwLock<HashMap>` per store.
//! Holding the interest map's write lock across the lookup-and-write makes
//! the upsert atomic, which is the same guarantee the Postgres adapter gets
//! from its unique email index.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{InterestStore, TicketStore};
use crate::domain::money::to_minor_units;
use crate::domain::{InterestRecord, InterestSubmission, TicketTier, UpsertOutcome};
use crate::error::IntakeError;

/// In-memory ticket catalog keyed by tier id.
#[derive(Debug, Default)]
pub struct MemoryTicketStore {
    tiers: RwLock<HashMap<String, TicketTier>>,
}

impl MemoryTicketStore {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with the 2026 tier lineup from the site
    /// fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        let tiers = seed_tiers()
            .into_iter()
            .map(|tier| (tier.id.clone(), tier))
            .collect();
        Self {
            tiers: RwLock::new(tiers),
        }
    }

    /// Inserts or replaces a tier. Used by tests to shape availability.
    pub async fn put(&self, tier: TicketTier) {
        self.tiers.write().await.insert(tier.id.clone(), tier);
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn get(&self, id: &str) -> Result<Option<TicketTier>, IntakeError> {
        Ok(self.tiers.read().await.get(id).cloned())
    }
}

/// In-memory interest registry keyed by normalized email.
#[derive(Debug, Default)]
pub struct MemoryInterestStore {
    records: RwLock<HashMap<String, InterestRecord>>,
}

impl MemoryInterestStore {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the record for the given email, if present.
    pub async fn get_by_email(&self, email: &str) -> Option<InterestRecord> {
        self.records.read().await.get(&email.to_lowercase()).cloned()
    }
}

#[async_trait]
impl InterestStore for MemoryInterestStore {
    async fn upsert_by_email(
        &self,
        submission: &InterestSubmission,
    ) -> Result<UpsertOutcome, IntakeError> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.get_mut(&submission.email) {
            existing.apply(submission);
            return Ok(UpsertOutcome::Updated(existing.id));
        }
        let record = InterestRecord::from_submission(submission);
        let id = record.id;
        records.insert(record.email.clone(), record);
        Ok(UpsertOutcome::Created(id))
    }

    async fn count(&self) -> Result<u64, IntakeError> {
        Ok(self.records.read().await.len() as u64)
    }
}

/// The four published tiers. The site fixture carries dollar prices, so
/// they are converted to cents on the way in.
fn seed_tiers() -> Vec<TicketTier> {
    let tier = |id: &str, price_major: f64, quantity: u32, sold: u32| TicketTier {
        id: id.to_string(),
        tier: id.to_string(),
        price_minor_units: to_minor_units(price_major),
        quantity,
        sold,
        active: true,
    };
    vec![
        tier("early", 25.0, 80, 67),
        tier("fast", 40.0, 80, 23),
        tier("general", 50.0, 120, 8),
        tier("last", 60.0, 50, 0),
    ]
}
