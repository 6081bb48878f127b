//! # mxsv-intake
//!
//! Order and interest intake service for the MXSV 2026 conference site.
//!
//! The marketing site itself is static; the two things that mutate state —
//! interest-form submissions and ticket checkout — live here, behind a small
//! REST surface. Payment is delegated entirely to a hosted provider; this
//! service only validates availability and opens sessions.
//!
//! ## Architecture
//!
//! ```text
//! Clients (site frontend)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── InterestService / CheckoutService (service/)
//!     │
//!     ├── TicketStore / InterestStore (store/: memory or PostgreSQL)
//!     └── CheckoutProvider (payment/: Stripe)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod payment;
pub mod service;
pub mod store;
