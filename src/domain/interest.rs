//! Interest registry types: submission input, stored record, upsert outcome.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why the submitter is interested in the conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    /// Wants to attend.
    Participant,
    /// Press / media coverage.
    Media,
    /// Potential sponsor or supporter.
    Supporter,
    /// Wants to speak.
    Speaker,
    /// Anything else.
    Other,
}

impl InterestType {
    /// All accepted wire values, used in validation error messages.
    pub const ALL: [Self; 5] = [
        Self::Participant,
        Self::Media,
        Self::Supporter,
        Self::Speaker,
        Self::Other,
    ];

    /// Lowercase wire form of this variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::Media => "media",
            Self::Supporter => "supporter",
            Self::Speaker => "speaker",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterestType {
    type Err = UnknownInterestType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "participant" => Ok(Self::Participant),
            "media" => Ok(Self::Media),
            "supporter" => Ok(Self::Supporter),
            "speaker" => Ok(Self::Speaker),
            "other" => Ok(Self::Other),
            _ => Err(UnknownInterestType(s.to_string())),
        }
    }
}

/// Error returned when parsing an out-of-enumeration interest type.
#[derive(Debug, thiserror::Error)]
#[error("unknown interest type: {0}")]
pub struct UnknownInterestType(pub String);

/// A validated interest submission, ready for the registry.
///
/// The email is stored case-normalized; [`InterestSubmission::new`] lowercases
/// it so that lookups and the storage unique constraint agree on the key.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestSubmission {
    /// Deduplication key, lowercase.
    pub email: String,
    /// Submitter's full name.
    pub full_name: String,
    /// Submitter's organization.
    pub organization: String,
    /// Declared interest.
    pub interest_type: InterestType,
    /// Optional free-text comments.
    pub comments: Option<String>,
}

impl InterestSubmission {
    /// Builds a submission, normalizing the email to lowercase.
    #[must_use]
    pub fn new(
        email: &str,
        full_name: String,
        organization: String,
        interest_type: InterestType,
        comments: Option<String>,
    ) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            full_name,
            organization,
            interest_type,
            comments,
        }
    }
}

/// A stored interest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Deduplication key, lowercase. Never changed after creation.
    pub email: String,
    /// Submitter's full name (latest submission wins).
    pub full_name: String,
    /// Submitter's organization (latest submission wins).
    pub organization: String,
    /// Declared interest (latest submission wins).
    pub interest_type: InterestType,
    /// Optional free-text comments (latest submission wins).
    pub comments: Option<String>,
    /// First-submission timestamp. Never changed after creation.
    pub created_at: DateTime<Utc>,
    /// Last-submission timestamp.
    pub updated_at: DateTime<Utc>,
}

impl InterestRecord {
    /// Creates a fresh record from a submission with generated id and
    /// timestamps.
    #[must_use]
    pub fn from_submission(submission: &InterestSubmission) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: submission.email.clone(),
            full_name: submission.full_name.clone(),
            organization: submission.organization.clone(),
            interest_type: submission.interest_type,
            comments: submission.comments.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a repeat submission: overwrites the mutable fields and bumps
    /// `updated_at`, leaving `id`, `email`, and `created_at` untouched.
    pub fn apply(&mut self, submission: &InterestSubmission) {
        self.full_name = submission.full_name.clone();
        self.organization = submission.organization.clone();
        self.interest_type = submission.interest_type;
        self.comments = submission.comments.clone();
        self.updated_at = Utc::now();
    }
}

/// Result of an idempotent-by-email upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was created with this id.
    Created(Uuid),
    /// An existing record with this id was updated in place.
    Updated(Uuid),
}

impl UpsertOutcome {
    /// The id of the affected record, regardless of outcome.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn interest_type_round_trips_through_str() {
        for ty in InterestType::ALL {
            let parsed = InterestType::from_str(ty.as_str());
            assert_eq!(parsed.ok(), Some(ty));
        }
    }

    #[test]
    fn interest_type_rejects_unknown() {
        assert!(InterestType::from_str("sponsor").is_err());
        assert!(InterestType::from_str("Participant").is_err());
    }

    #[test]
    fn interest_type_serde_uses_lowercase() {
        let json = serde_json::to_string(&InterestType::Speaker).ok();
        assert_eq!(json.as_deref(), Some("\"speaker\""));
    }

    #[test]
    fn submission_normalizes_email() {
        let sub = InterestSubmission::new(
            " Ana@X.Com ",
            "Ana Cruz".to_string(),
            "Acme".to_string(),
            InterestType::Participant,
            None,
        );
        assert_eq!(sub.email, "ana@x.com");
    }

    #[test]
    fn apply_preserves_identity_fields() {
        let sub = InterestSubmission::new(
            "ana@x.com",
            "Ana Cruz".to_string(),
            "Acme".to_string(),
            InterestType::Participant,
            None,
        );
        let mut record = InterestRecord::from_submission(&sub);
        let (id, email, created_at) = (record.id, record.email.clone(), record.created_at);

        let repeat = InterestSubmission::new(
            "ana@x.com",
            "Ana Cruz".to_string(),
            "Initech".to_string(),
            InterestType::Speaker,
            Some("second time".to_string()),
        );
        record.apply(&repeat);

        assert_eq!(record.id, id);
        assert_eq!(record.email, email);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.organization, "Initech");
        assert_eq!(record.interest_type, InterestType::Speaker);
        assert!(record.updated_at >= created_at);
    }

    #[test]
    fn outcome_exposes_id() {
        let id = Uuid::new_v4();
        assert_eq!(UpsertOutcome::Created(id).id(), id);
        assert_eq!(UpsertOutcome::Updated(id).id(), id);
    }
}
