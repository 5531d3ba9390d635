//! # UK VIP Checkout
//!
//! Booking checkout service in front of SumUp.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export SUMUP_ACCESS_TOKEN=...
//! export SUMUP_MERCHANT_CODE=...
//! export SMTP_HOST=smtp.example.com SMTP_USER=... SMTP_PASS=...
//! export FROM_EMAIL=bookings@example.com ADMIN_EMAIL=admin@example.com
//!
//! # Run the server
//! ukvip-checkout
//! ```

use pay_api::{routes, state::AppState, CREATE_CHECKOUT_PATH, SUMUP_WEBHOOK_PATH};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider_name());

    if !state.sumup.is_configured() {
        warn!("SUMUP_ACCESS_TOKEN / SUMUP_MERCHANT_CODE not set, checkouts will be refused");
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 UK VIP Checkout starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("💳 Checkout: POST http://{}{}", addr, CREATE_CHECKOUT_PATH);
        info!("🔔 Webhook: POST http://{}{}", addr, SUMUP_WEBHOOK_PATH);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🚘 UK VIP Checkout 🚘
  ━━━━━━━━━━━━━━━━━━━━━━━
  SumUp booking checkout
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
