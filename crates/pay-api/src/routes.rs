//! # Routes
//!
//! Axum router configuration for the booking checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

/// Path of the checkout creation endpoint
pub const CREATE_CHECKOUT_PATH: &str = "/api/create-checkout";

/// Path of the SumUp webhook endpoint
pub const SUMUP_WEBHOOK_PATH: &str = "/api/sumup-webhook";

/// Create the main application router
///
/// Routes:
/// - GET  /health, / - Health check
/// - POST /api/create-checkout - Create checkout, notify admin
/// - POST /api/sumup-webhook - SumUp payment callback, notify admin
///
/// Both API routes answer OPTIONS with 204 and anything else with 405, and
/// every API response carries permissive CORS headers.
pub fn create_router(state: AppState) -> Router {
    // Preflight answers 204; the headers go on every response, errors included.
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(CatchPanicLayer::custom(handlers::panic_response));

    let api_routes = Router::new()
        .route(CREATE_CHECKOUT_PATH, post_only(post(handlers::create_checkout)))
        .route(SUMUP_WEBHOOK_PATH, post_only(post(handlers::sumup_webhook)))
        .layer(cors_headers);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .merge(api_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

fn post_only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}
