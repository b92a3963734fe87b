//! Shortbread: API scaffolding for a short-form video sharing service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, sets up the Axum router with all routes and the
//! CORS layer, and starts the HTTP server with graceful shutdown.

mod config;
mod http;
mod middleware;
mod routes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use routes::create_router;

/// Shortbread: API for sharing and organizing short-form videos
#[derive(Parser, Debug)]
#[command(name = "shortbread", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "shortbread=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing init so [logging] can pick the format
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(path = %args.config, "Loaded configuration");

    // Log the cross-origin allow-list
    for origin in &config.cors.allowed_origins {
        tracing::info!(origin = %origin, "CORS origin allowed");
    }

    // Create router
    let app = create_router(&config);

    // Start server; blocks until shutdown
    http::start_server(app, &config).await?;

    Ok(())
}
