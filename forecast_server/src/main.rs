//! # forecast_server
//!
//! REST API server for per-product sales trend forecasting. Exposes a
//! train operation (fit and persist one model per product) and a predict
//! operation (fit-on-the-fly over submitted history).

use axum::{
    routing::{get, post},
    Router,
};
use sales_forecast::ModelStore;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<ModelStore>,
}

impl AppState {
    pub fn store(&self) -> &ModelStore {
        &self.store
    }
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_server=info,tower_http=info".into()),
        )
        .init();

    // Models directory from environment
    let model_dir = env::var("MODEL_DIR").unwrap_or_else(|_| "models".to_string());
    let store = ModelStore::new(&model_dir).expect("failed to open models directory");

    let state = AppState {
        store: Arc::new(store),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/train", post(routes::train))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5001".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "forecast_server v{} listening on {} (models in {})",
        env!("CARGO_PKG_VERSION"),
        addr,
        model_dir
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
