//! Interest form endpoint handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{InterestAckResponse, InterestCountResponse, InterestRequest};
use crate::app_state::AppState;
use crate::domain::UpsertOutcome;
use crate::error::{FieldViolation, IntakeError, InterestErrorResponse};

/// `POST /api/interest` — Register or update an interest submission.
#[utoipa::path(
    post,
    path = "/api/interest",
    tag = "Interest",
    summary = "Register interest",
    description = "Upserts an interest record keyed by email. A repeat submission with a \
                   known email updates the existing record instead of creating a duplicate.",
    request_body = InterestRequest,
    responses(
        (status = 200, description = "Record created or updated", body = InterestAckResponse),
        (status = 400, description = "Invalid form data", body = InterestErrorResponse),
        (status = 500, description = "Internal server error", body = InterestErrorResponse),
    )
)]
pub async fn register_interest(
    State(state): State<AppState>,
    body: Result<Json<InterestRequest>, JsonRejection>,
) -> Response {
    // A body that never deserializes gets the same structured 400 as a body
    // with bad field values, not the framework's plain-text rejection.
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return IntakeError::Validation(vec![FieldViolation {
                field: "body".to_string(),
                message: rejection.body_text(),
            }])
            .into_response();
        }
    };
    let submission = match req.into_submission() {
        Ok(submission) => submission,
        Err(err) => return err.into_response(),
    };

    match state.interest.register(submission).await {
        Ok(outcome) => {
            let message = match outcome {
                UpsertOutcome::Created(_) => "Interest registered successfully",
                UpsertOutcome::Updated(_) => "Interest updated successfully",
            };
            Json(InterestAckResponse {
                success: true,
                message: message.to_string(),
                id: outcome.id().to_string(),
            })
            .into_response()
        }
        Err(err) => internal_error(&err),
    }
}

/// `GET /api/interest` — Total number of interest records.
#[utoipa::path(
    get,
    path = "/api/interest",
    tag = "Interest",
    summary = "Count interest records",
    responses(
        (status = 200, description = "Current record count", body = InterestCountResponse),
        (status = 500, description = "Internal server error", body = InterestErrorResponse),
    )
)]
pub async fn interest_count(State(state): State<AppState>) -> Response {
    match state.interest.count().await {
        Ok(count) => Json(InterestCountResponse {
            success: true,
            count,
            message: format!("{count} people have registered their interest"),
        })
        .into_response(),
        Err(err) => internal_error(&err),
    }
}

/// 500 response in the interest endpoints' error shape. Detail stays in the
/// server log.
fn internal_error(err: &IntakeError) -> Response {
    tracing::error!(error = %err, "interest request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(InterestErrorResponse {
            success: false,
            error: "Internal server error".to_string(),
            details: None,
        }),
    )
        .into_response()
}

/// Interest routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/interest", post(register_interest).get(interest_count))
}
