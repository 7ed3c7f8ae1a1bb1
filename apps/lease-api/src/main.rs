//! Lease Calculator API Server
//!
//! Serves the lease calculator over HTTP:
//!
//! - Calculations for every calculator mode
//! - Mode listing with required fields
//! - Mock checkout and analysis endpoints for the paid report flow

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
#[cfg(test)]
mod tests;

use api::{handle_analyze, handle_calculate, handle_checkout, handle_health, handle_list_modes};

/// Command-line arguments for the lease calculator server
#[derive(Parser, Debug)]
#[command(name = "lease-api")]
#[command(about = "Lease cost calculator API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Base URL mock checkout sessions point at
    #[arg(long, env = "CHECKOUT_BASE_URL", default_value = "https://checkout.example.com")]
    checkout_base_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Base URL for generated checkout links, without trailing slash
    pub checkout_base_url: String,
}

impl AppState {
    pub fn new(checkout_base_url: impl Into<String>) -> Self {
        let checkout_base_url: String = checkout_base_url.into();
        Self {
            checkout_base_url: checkout_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Calculator
        .route("/api/modes", get(handle_list_modes))
        .route("/api/calculate", post(handle_calculate))
        // Mock payment flow
        .route("/checkout", post(handle_checkout))
        .route("/api/analyze", post(handle_analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting lease calculator API on {}:{}", args.host, args.port);

    let state = AppState::new(args.checkout_base_url);
    let app = create_router(state.clone());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Checkout base URL: {}", state.checkout_base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
