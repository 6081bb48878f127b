//! Interest endpoint DTOs and boundary validation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{InterestSubmission, InterestType};
use crate::error::{FieldViolation, IntakeError};

/// Request body for `POST /api/interest`.
///
/// Every field is optional at the deserialization level so a missing field
/// or an out-of-enumeration `interest_type` lands in the same structured
/// 400 with per-field details, instead of a bare deserialization rejection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterestRequest {
    /// Submitter's full name, at least 2 characters.
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub full_name: Option<String>,
    /// Contact email; deduplication key.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// Submitter's organization, at least 2 characters.
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub organization: Option<String>,
    /// One of `participant`, `media`, `supporter`, `speaker`, `other`.
    #[validate(custom(function = validate_interest_type))]
    pub interest_type: Option<String>,
    /// Optional free-text comments.
    #[serde(default)]
    pub comments: Option<String>,
}

impl InterestRequest {
    /// Validates the request and converts it into a domain submission.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Validation`] carrying one violation per
    /// offending field, named in wire (camelCase) form. Missing required
    /// fields and malformed present fields are reported together.
    pub fn into_submission(self) -> Result<InterestSubmission, IntakeError> {
        let mut details = Vec::new();
        if let Err(errors) = self.validate() {
            details.extend(violations(&errors));
        }
        for (field, present) in [
            ("fullName", self.full_name.is_some()),
            ("email", self.email.is_some()),
            ("organization", self.organization.is_some()),
            ("interestType", self.interest_type.is_some()),
        ] {
            if !present {
                details.push(FieldViolation {
                    field: field.to_string(),
                    message: "is required".to_string(),
                });
            }
        }
        if !details.is_empty() {
            return Err(IntakeError::Validation(details));
        }

        let (Some(full_name), Some(email), Some(organization), Some(raw_type)) =
            (self.full_name, self.email, self.organization, self.interest_type)
        else {
            // Unreachable: absence was reported above.
            return Err(IntakeError::Internal("validated field missing".to_string()));
        };
        let interest_type = InterestType::from_str(&raw_type)
            .map_err(|_| IntakeError::Validation(vec![interest_type_violation()]))?;

        Ok(InterestSubmission::new(
            &email,
            full_name,
            organization,
            interest_type,
            self.comments.filter(|c| !c.trim().is_empty()),
        ))
    }
}

/// Success body for `POST /api/interest`.
#[derive(Debug, Serialize, ToSchema)]
pub struct InterestAckResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Whether the record was registered or updated.
    pub message: String,
    /// Id of the created or updated record.
    pub id: String,
}

/// Success body for `GET /api/interest`.
#[derive(Debug, Serialize, ToSchema)]
pub struct InterestCountResponse {
    /// Always `true` on success.
    pub success: bool,
    /// Total number of interest records.
    pub count: u64,
    /// Human-readable summary of `count`.
    pub message: String,
}

fn validate_interest_type(value: &str) -> Result<(), ValidationError> {
    if InterestType::from_str(value).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("interest_type"))
    }
}

fn interest_type_violation() -> FieldViolation {
    FieldViolation {
        field: "interestType".to_string(),
        message: format!(
            "must be one of: {}",
            InterestType::ALL.map(|t| t.as_str()).join(", ")
        ),
    }
}

/// Flattens [`ValidationErrors`] into wire-named field violations.
fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut details = Vec::new();
    for (field, errs) in errors.field_errors() {
        let wire_field = match field.as_ref() {
            "full_name" => "fullName",
            "interest_type" => "interestType",
            other => other,
        };
        for err in errs {
            if err.code == "interest_type" {
                details.push(interest_type_violation());
                continue;
            }
            let message = err
                .message
                .as_ref()
                .map_or_else(|| format!("invalid value ({})", err.code), |m| m.to_string());
            details.push(FieldViolation {
                field: wire_field.to_string(),
                message,
            });
        }
    }
    details
}
