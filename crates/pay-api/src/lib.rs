//! # pay-api
//!
//! HTTP API layer for the VIP transfer booking checkout service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Checkout creation endpoint (SumUp) with admin notification
//! - Webhook handler for SumUp payment callbacks
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/create-checkout` | Create checkout session |
//! | POST | `/api/sumup-webhook` | SumUp payment callback |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, CREATE_CHECKOUT_PATH, SUMUP_WEBHOOK_PATH};
pub use state::{AppConfig, AppState};
