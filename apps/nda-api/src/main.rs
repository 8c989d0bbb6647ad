//! NDA Review API Server
//!
//! Provides REST endpoints for:
//! - File-to-text extraction (plain text and PDF uploads)
//! - Clause-by-clause NDA analysis via the hosted AI service
//! - Redline / clean document generation from analysis findings
//! - Plain-text export of either derived document

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
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
mod state;

use api::{handle_analyze, handle_export, handle_extract, handle_health, handle_redline};
use doc_extract::LocalExtractor;
use nda_analysis::{AnonymousIdentity, ClaudeAnalyzer};
use state::AppState;

/// Command-line arguments for the NDA API server
#[derive(Parser, Debug)]
#[command(name = "nda-api")]
#[command(about = "NDA review API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3002")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Initializing NDA API...");
    let analyzer = ClaudeAnalyzer::from_env()?;
    let state = AppState::new(
        Arc::new(analyzer),
        Arc::new(LocalExtractor::new()),
        Arc::new(AnonymousIdentity),
    );

    // CORS configuration for the web client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/api/extract", post(handle_extract))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/redline", post(handle_redline))
        .route("/api/export", post(handle_export))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("NDA API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
