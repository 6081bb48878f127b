//! Interest registry service: idempotent-by-email upsert and count.

use std::fmt;
use std::sync::Arc;

use crate::domain::{InterestSubmission, UpsertOutcome};
use crate::error::IntakeError;
use crate::store::InterestStore;

/// Orchestrates interest submissions over an [`InterestStore`].
///
/// Field validation happens at the HTTP boundary before this service is
/// called; by the time a submission reaches [`InterestService::register`] it
/// is well-formed and its email is case-normalized.
#[derive(Clone)]
pub struct InterestService {
    store: Arc<dyn InterestStore>,
}

impl fmt::Debug for InterestService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterestService").finish_non_exhaustive()
    }
}

impl InterestService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn InterestStore>) -> Self {
        Self { store }
    }

    /// Registers interest: creates a record for an unseen email, updates the
    /// existing record otherwise. The store makes that decision atomically.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Store`] if the backend fails.
    pub async fn register(
        &self,
        submission: InterestSubmission,
    ) -> Result<UpsertOutcome, IntakeError> {
        let outcome = self.store.upsert_by_email(&submission).await?;
        match outcome {
            UpsertOutcome::Created(id) => {
                tracing::info!(record_id = %id, interest_type = %submission.interest_type, "interest registered");
            }
            UpsertOutcome::Updated(id) => {
                tracing::info!(record_id = %id, interest_type = %submission.interest_type, "interest updated");
            }
        }
        Ok(outcome)
    }

    /// Total number of interest records.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Store`] if the backend fails.
    pub async fn count(&self) -> Result<u64, IntakeError> {
        self.store.count().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::InterestType;
    use crate::store::memory::MemoryInterestStore;

    fn service() -> (InterestService, Arc<MemoryInterestStore>) {
        let store = Arc::new(MemoryInterestStore::new());
        (InterestService::new(Arc::clone(&store) as Arc<dyn InterestStore>), store)
    }

    fn ana(organization: &str) -> InterestSubmission {
        InterestSubmission::new(
            "ana@x.com",
            "Ana Cruz".to_string(),
            organization.to_string(),
            InterestType::Participant,
            None,
        )
    }

    #[tokio::test]
    async fn register_twice_updates_same_record() {
        let (service, store) = service();

        let Ok(first) = service.register(ana("Acme")).await else {
            panic!("first register failed");
        };
        let Ok(second) = service.register(ana("Initech")).await else {
            panic!("second register failed");
        };

        assert!(matches!(first, UpsertOutcome::Created(_)));
        assert!(matches!(second, UpsertOutcome::Updated(_)));
        assert_eq!(first.id(), second.id());
        assert_eq!(service.count().await.ok(), Some(1));

        let stored = store.get_by_email("ana@x.com").await;
        let Some(stored) = stored else {
            panic!("record missing");
        };
        assert_eq!(stored.organization, "Initech");
    }

    #[tokio::test]
    async fn count_starts_at_zero() {
        let (service, _) = service();
        assert_eq!(service.count().await.ok(), Some(0));
    }
}
