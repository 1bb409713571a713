//! Inspection Records Server
//!
//! A small stateless server in front of the inspection form normalizer.
//! Provides REST API endpoints for:
//!
//! - Normalizing a submitted form into the records payload
//! - Previewing how a date field will be sent
//! - Listing the offices, procedures and applicant types a form offers
//!
//! Submission to the records backend stays with the caller.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_canonicalize_date, handle_catalog, handle_health, handle_normalize};

/// Command-line arguments for the inspection server
#[derive(Parser, Debug)]
#[command(name = "inspection-server")]
#[command(about = "Inspection records server for form normalization")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "INSPECTION_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "INSPECTION_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "INSPECTION_RATE_LIMIT", default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// API routes without middleware
pub fn router() -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/catalog", get(handle_catalog))
        .route("/api/inspections/normalize", post(handle_normalize))
        .route("/api/dates/canonicalize", post(handle_canonicalize_date))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting inspection server on {}:{}", args.host, args.port);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .context("Rate limit must be at least 1 request per second")?,
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(GovernorLayer {
                config: governor_conf,
            }),
    );

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    // The rate limiter keys on the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
