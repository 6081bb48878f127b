//! PostgreSQL store adapters using `sqlx::PgPool`.
//!
//! The interest upsert is a single `INSERT … ON CONFLICT` statement so the
//! create-vs-update decision is made atomically by the unique email index;
//! `(xmax = 0)` distinguishes a fresh insert from a conflict-update in the
//! same round trip.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{InterestStore, TicketStore};
use crate::domain::{InterestSubmission, TicketTier, UpsertOutcome};
use crate::error::IntakeError;

/// PostgreSQL-backed ticket catalog.
#[derive(Debug, Clone)]
pub struct PostgresTicketStore {
    pool: PgPool,
}

impl PostgresTicketStore {
    /// Creates a catalog adapter over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PostgresTicketStore {
    async fn get(&self, id: &str) -> Result<Option<TicketTier>, IntakeError> {
        let row = sqlx::query_as::<_, (String, String, i64, i32, i32, bool)>(
            "SELECT id, tier, price_minor_units, quantity, sold, active \
             FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, tier, price_minor_units, quantity, sold, active)| {
            TicketTier {
                id,
                tier,
                price_minor_units,
                quantity: u32::try_from(quantity).unwrap_or(0),
                sold: u32::try_from(sold).unwrap_or(0),
                active,
            }
        }))
    }
}

/// PostgreSQL-backed interest registry.
#[derive(Debug, Clone)]
pub struct PostgresInterestStore {
    pool: PgPool,
}

impl PostgresInterestStore {
    /// Creates a registry adapter over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterestStore for PostgresInterestStore {
    async fn upsert_by_email(
        &self,
        submission: &InterestSubmission,
    ) -> Result<UpsertOutcome, IntakeError> {
        let (id, inserted) = sqlx::query_as::<_, (Uuid, bool)>(
            "INSERT INTO interest_forms \
               (id, email, full_name, organization, interest_type, comments) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (email) DO UPDATE SET \
               full_name = EXCLUDED.full_name, \
               organization = EXCLUDED.organization, \
               interest_type = EXCLUDED.interest_type, \
               comments = EXCLUDED.comments, \
               updated_at = now() \
             RETURNING id, (xmax = 0) AS inserted",
        )
        .bind(Uuid::new_v4())
        .bind(&submission.email)
        .bind(&submission.full_name)
        .bind(&submission.organization)
        .bind(submission.interest_type.as_str())
        .bind(&submission.comments)
        .fetch_one(&self.pool)
        .await?;

        Ok(if inserted {
            UpsertOutcome::Created(id)
        } else {
            UpsertOutcome::Updated(id)
        })
    }

    async fn count(&self) -> Result<u64, IntakeError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM interest_forms")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
