//! Smart Home Energy Prediction Server
//!
//! HTTP front end for the household & weather form.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  ENERGY PREDICTION SERVER                │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────────────────────────┐   │
//! │  │  API      │──▶│  PredictionSession               │   │
//! │  │  (Axum)   │   │  features → model → level → log  │   │
//! │  └───────────┘   └───────────────┬──────────────────┘   │
//! │                                  ▼                      │
//! │                        ┌───────────────────┐            │
//! │                        │ ONNX model + .json │            │
//! │                        └───────────────────┘            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The model is loaded and its schema validated before the listener binds;
//! any failure there aborts startup.

mod config;
mod error;
mod extract;
mod handlers;
mod models;


use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::get,
};
use parking_lot::Mutex;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use energy_core::constants::{APP_NAME, APP_VERSION};
use energy_core::{OnnxModel, PredictionSession, Predictor};

pub use error::AppResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    init_tracing(&config);

    tracing::info!("{} v{} starting...", APP_NAME, APP_VERSION);
    tracing::info!("Model: {} (metadata: {})", config.model_path, config.metadata_path);

    // Load and validate the model; no fallback
    let model = OnnxModel::load(Path::new(&config.model_path), Path::new(&config.metadata_path))
        .with_context(|| format!("Failed to load model {}", config.model_path))?;

    let predictor = Predictor::new(Arc::new(model))
        .context("Model input schema does not match the feature layout")?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    let state = AppState::new(PredictionSession::new(predictor), config);
    let app = create_router(state);

    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "energy_server=debug,energy_core=info,tower_http=debug".into());

    if config.json_logs() || config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Shared application state
///
/// Holds the single interactive session; the mutex serialises the form
/// actions so only one runs at a time.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<PredictionSession>>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(session: PredictionSession, config: config::Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            config,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/model", get(handlers::model::info))
        .route("/api/v1/form", get(handlers::model::form))
        .route(
            "/api/v1/predictions",
            get(handlers::predictions::list).post(handlers::predictions::create),
        )
        .route("/api/v1/predictions/compare", get(handlers::predictions::compare));

    let cors = if state.config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
