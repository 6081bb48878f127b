//! mxsv-intake server entry point.
//!
//! Starts the Axum HTTP server with the interest and checkout endpoints.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use mxsv_intake::api;
use mxsv_intake::app_state::AppState;
use mxsv_intake::config::IntakeConfig;
use mxsv_intake::payment::stripe::StripeCheckout;
use mxsv_intake::service::{CheckoutService, InterestService};
use mxsv_intake::store::memory::{MemoryInterestStore, MemoryTicketStore};
use mxsv_intake::store::postgres::{PostgresInterestStore, PostgresTicketStore};
use mxsv_intake::store::{InterestStore, TicketStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = IntakeConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting mxsv-intake");

    if config.stripe_secret_key.is_empty() {
        tracing::warn!("STRIPE_SECRET_KEY is not set; checkout sessions will fail");
    }

    // Build storage layer
    let (tickets, interest_store): (Arc<dyn TicketStore>, Arc<dyn InterestStore>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .min_connections(config.database_min_connections)
                    .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
                    .connect(database_url)
                    .await?;
                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("connected to postgres");
                (
                    Arc::new(PostgresTicketStore::new(pool.clone())),
                    Arc::new(PostgresInterestStore::new(pool)),
                )
            }
            None => {
                tracing::warn!("DATABASE_URL not set; using seeded in-memory stores");
                (
                    Arc::new(MemoryTicketStore::seeded()),
                    Arc::new(MemoryInterestStore::new()),
                )
            }
        };

    // Build payment provider
    let provider = Arc::new(StripeCheckout::new(
        config.stripe_api_base.clone(),
        config.stripe_secret_key.clone(),
    ));

    // Build service layer
    let app_state = AppState {
        interest: Arc::new(InterestService::new(interest_store)),
        checkout: Arc::new(CheckoutService::new(
            tickets,
            provider,
            config.site_url.clone(),
            config.checkout_currency.clone(),
            config.default_locale.clone(),
        )),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
