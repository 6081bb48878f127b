//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Intake endpoints are mounted under `/api`; system endpoints sit at the
//! root.

pub mod dto;
pub mod handlers;

use axum::Router;
#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Aggregated OpenAPI document covering every mounted endpoint.
#[derive(Debug, utoipa::OpenApi)]
#[openapi(
    info(
        title = "mxsv-intake",
        description = "Order and interest intake API for the MXSV 2026 conference site"
    ),
    paths(
        handlers::interest::register_interest,
        handlers::interest::interest_count,
        handlers::checkout::create_checkout,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Interest", description = "Interest form registration"),
        (name = "Tickets", description = "Ticket checkout sessions"),
        (name = "System", description = "Health and service status"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature (on by default) the interactive docs are
/// served at `/docs`, backed by the JSON document at
/// `/api-docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;
    use utoipa::OpenApi;

    use super::{ApiDoc, build_router};
    use crate::app_state::AppState;
    use crate::domain::TicketTier;
    use crate::payment::mock::MockProvider;
    use crate::service::{CheckoutService, InterestService};
    use crate::store::memory::{MemoryInterestStore, MemoryTicketStore};

    fn state_with(tickets: Arc<MemoryTicketStore>, provider: Arc<MockProvider>) -> AppState {
        AppState {
            interest: Arc::new(InterestService::new(Arc::new(MemoryInterestStore::new()))),
            checkout: Arc::new(CheckoutService::new(
                tickets,
                provider,
                "https://mxsv.example".to_string(),
                "usd".to_string(),
                "en".to_string(),
            )),
        }
    }

    fn app() -> Router {
        let state = state_with(
            Arc::new(MemoryTicketStore::seeded()),
            Arc::new(MockProvider::new()),
        );
        build_router().with_state(state)
    }

    async fn send_json(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .ok();
        let Some(request) = request else {
            panic!("invalid request");
        };
        let response = app.oneshot(request).await;
        let Ok(response) = response else {
            panic!("router failed");
        };
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await;
        let Ok(bytes) = bytes else {
            panic!("failed to read body");
        };
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    const ANA: &str = r#"{"fullName":"Ana Cruz","email":"ana@x.com","organization":"Acme","interestType":"participant"}"#;

    #[tokio::test]
    async fn health_is_ok() {
        let (status, json) = send_json(app(), "GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn interest_post_creates_then_updates() {
        let app = app();

        let (status, first) = send_json(app.clone(), "POST", "/api/interest", ANA).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["success"], true);
        assert_eq!(first["message"], "Interest registered successfully");

        let repeat = r#"{"fullName":"Ana Cruz","email":"ana@x.com","organization":"Initech","interestType":"participant"}"#;
        let (status, second) = send_json(app.clone(), "POST", "/api/interest", repeat).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["message"], "Interest updated successfully");
        assert_eq!(second["id"], first["id"]);

        let (status, count) = send_json(app, "GET", "/api/interest", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count["count"], 1);
        assert_eq!(count["message"], "1 people have registered their interest");
    }

    #[tokio::test]
    async fn interest_post_rejects_invalid_body_with_details() {
        let invalid = r#"{"fullName":"A","email":"nope","organization":"B","interestType":"sponsor"}"#;
        let (status, json) = send_json(app(), "POST", "/api/interest", invalid).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid form data");
        let details = json["details"].as_array();
        let Some(details) = details else {
            panic!("expected details array");
        };
        assert!(details.len() >= 3);

        // Nothing was stored.
        let (_, count) = send_json(app(), "GET", "/api/interest", "").await;
        assert_eq!(count["count"], 0);
    }

    #[tokio::test]
    async fn interest_post_malformed_json_keeps_error_shape() {
        let (status, json) = send_json(app(), "POST", "/api/interest", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid form data");
        assert_eq!(json["details"][0]["field"], "body");
    }

    #[test]
    fn openapi_doc_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/interest"));
        assert!(doc.paths.paths.contains_key("/api/tickets/checkout"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[cfg(feature = "swagger-ui")]
    #[tokio::test]
    async fn openapi_json_is_served() {
        let (status, json) = send_json(app(), "GET", "/api-docs/openapi.json", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["paths"]["/api/interest"].is_object());
    }

    #[tokio::test]
    async fn checkout_happy_path_returns_url() {
        let body = r#"{"ticketId":"early","locale":"es"}"#;
        let (status, json) = send_json(app(), "POST", "/api/tickets/checkout", body).await;
        assert_eq!(status, StatusCode::OK);
        let url = json["url"].as_str();
        let Some(url) = url else {
            panic!("expected url string");
        };
        assert!(url.starts_with("https://"));
    }

    #[tokio::test]
    async fn checkout_requires_ticket_id() {
        let (status, json) = send_json(app(), "POST", "/api/tickets/checkout", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Ticket ID is required");
    }

    #[tokio::test]
    async fn checkout_unknown_ticket_is_404() {
        let body = r#"{"ticketId":"vip"}"#;
        let (status, json) = send_json(app(), "POST", "/api/tickets/checkout", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Ticket not found");
    }

    #[tokio::test]
    async fn checkout_sold_out_tier_is_400() {
        let tickets = Arc::new(MemoryTicketStore::new());
        tickets
            .put(TicketTier {
                id: "early".to_string(),
                tier: "early".to_string(),
                price_minor_units: 2500,
                quantity: 80,
                sold: 80,
                active: true,
            })
            .await;
        let app = build_router().with_state(state_with(tickets, Arc::new(MockProvider::new())));

        let body = r#"{"ticketId":"early","locale":"es"}"#;
        let (status, json) = send_json(app, "POST", "/api/tickets/checkout", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Ticket is sold out");
    }

    #[tokio::test]
    async fn checkout_inactive_tier_is_400() {
        let tickets = Arc::new(MemoryTicketStore::new());
        tickets
            .put(TicketTier {
                id: "early".to_string(),
                tier: "early".to_string(),
                price_minor_units: 2500,
                quantity: 80,
                sold: 0,
                active: false,
            })
            .await;
        let app = build_router().with_state(state_with(tickets, Arc::new(MockProvider::new())));

        let body = r#"{"ticketId":"early"}"#;
        let (status, json) = send_json(app, "POST", "/api/tickets/checkout", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Ticket is not available");
    }

    #[tokio::test]
    async fn checkout_provider_failure_is_opaque_500() {
        let tickets = Arc::new(MemoryTicketStore::seeded());
        let app = build_router().with_state(state_with(tickets, Arc::new(MockProvider::failing())));

        let body = r#"{"ticketId":"early"}"#;
        let (status, json) = send_json(app, "POST", "/api/tickets/checkout", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }
}
