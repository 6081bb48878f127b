//! Intake error types with HTTP status code mapping.
//!
//! [`IntakeError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and the JSON error shape the site's
//! frontend expects for that endpoint family.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Name of the offending field, in its wire (camelCase) form.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

/// Error shape for the ticket checkout endpoint.
///
/// ```json
/// { "error": "Ticket is sold out" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Error shape for the interest endpoints.
///
/// ```json
/// { "success": false, "error": "Invalid form data", "details": [...] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct InterestErrorResponse {
    /// Always `false` on error responses.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
    /// Field-level violations, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Interest form failed field validation.
    #[error("invalid form data: {0:?}")]
    Validation(Vec<FieldViolation>),

    /// Checkout request arrived without a ticket identifier.
    #[error("ticket id is required")]
    MissingTicketId,

    /// No ticket tier with the given identifier exists.
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    /// Tier exists but is not active for sale.
    #[error("ticket {0} is not available")]
    TicketUnavailable(String),

    /// Tier has no remaining capacity.
    #[error("ticket {0} is sold out")]
    TicketSoldOut(String),

    /// Storage layer failure.
    #[error("store error: {0}")]
    Store(String),

    /// Payment provider failure (network or non-2xx response).
    #[error("payment provider error: {0}")]
    Payment(String),

    /// Unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntakeError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::MissingTicketId
            | Self::TicketUnavailable(_)
            | Self::TicketSoldOut(_) => StatusCode::BAD_REQUEST,
            Self::TicketNotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Payment(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the message exposed to the caller.
    ///
    /// Store and payment detail stays server-side; clients only ever see
    /// `"Internal server error"` for those variants.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid form data",
            Self::MissingTicketId => "Ticket ID is required",
            Self::TicketNotFound(_) => "Ticket not found",
            Self::TicketUnavailable(_) => "Ticket is not available",
            Self::TicketSoldOut(_) => "Ticket is sold out",
            Self::Store(_) | Self::Payment(_) | Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns `true` if this error should be logged as a server fault.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Payment(_) | Self::Internal(_))
    }
}

impl From<sqlx::Error> for IntakeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "request failed");
        }
        let status = self.status_code();
        let message = self.public_message().to_string();
        let mut response = match self {
            Self::Validation(details) => axum::Json(InterestErrorResponse {
                success: false,
                error: message,
                details: Some(details),
            })
            .into_response(),
            _ => axum::Json(ErrorResponse { error: message }).into_response(),
        };
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            IntakeError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            IntakeError::MissingTicketId.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            IntakeError::TicketNotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            IntakeError::TicketUnavailable("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            IntakeError::TicketSoldOut("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            IntakeError::Payment("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let err = IntakeError::Store("connection refused to db-host:5432".to_string());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn exact_client_strings() {
        assert_eq!(
            IntakeError::MissingTicketId.public_message(),
            "Ticket ID is required"
        );
        assert_eq!(
            IntakeError::TicketNotFound("1".to_string()).public_message(),
            "Ticket not found"
        );
        assert_eq!(
            IntakeError::TicketUnavailable("1".to_string()).public_message(),
            "Ticket is not available"
        );
        assert_eq!(
            IntakeError::TicketSoldOut("1".to_string()).public_message(),
            "Ticket is sold out"
        );
    }
}
