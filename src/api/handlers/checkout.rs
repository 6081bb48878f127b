//! Ticket checkout endpoint handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CheckoutRequest, CheckoutResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, IntakeError};

/// `POST /api/tickets/checkout` — Open a hosted payment session for one
/// ticket.
///
/// # Errors
///
/// Returns [`IntakeError`] when the ticket id is missing, unknown, inactive,
/// or sold out, and on store or payment-provider failure.
#[utoipa::path(
    post,
    path = "/api/tickets/checkout",
    tag = "Tickets",
    summary = "Create checkout session",
    description = "Validates tier availability and opens a payment-provider checkout \
                   session. Inventory is not decremented here; the session only offers \
                   a purchase.",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Session created", body = CheckoutResponse),
        (status = 400, description = "Missing id, inactive tier, or sold out", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, IntakeError> {
    let url = state
        .checkout
        .initiate(req.ticket_id.as_deref(), req.locale.as_deref())
        .await?;
    Ok(Json(CheckoutResponse { url }))
}

/// Checkout routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tickets/checkout", post(create_checkout))
}
