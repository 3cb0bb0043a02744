use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use homescout_core::Predictor;
use homescout_store::memory::MemorySearchLog;
use homescout_store::ports::SearchLogStore;
use homescout_store::postgres::{PostgresConfig, PostgresStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homescout_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homescout_api=info,homescout_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::load().context("Failed to load configuration")?;

    tracing::info!(
        port = config.port,
        model = %config.model_path.display(),
        columns = %config.columns_path.display(),
        "Starting HomeScout API server"
    );

    // Without both artifacts the service cannot answer anything useful
    let predictor = match Predictor::load(&config.model_path, &config.columns_path) {
        Ok(predictor) => predictor,
        Err(e) => {
            tracing::error!("Failed to load price model: {}", e);
            tracing::error!(
                "Remediation:\n\
                1. Check that the model and columns files exist\n\
                2. Set HOMESCOUT_MODEL_PATH and HOMESCOUT_COLUMNS_PATH if they live elsewhere\n\
                3. Make sure the model width matches the column list"
            );
            std::process::exit(1);
        }
    };

    let search_log: Arc<dyn SearchLogStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("DATABASE_URL found, connecting to PostgreSQL...");
            match init_postgres_storage(database_url).await {
                Ok(store) => {
                    tracing::info!("Connected to PostgreSQL");
                    store
                }
                Err(e) => {
                    tracing::error!("Failed to connect to PostgreSQL: {}", e);
                    tracing::error!(
                        "Remediation:\n\
                        1. Ensure PostgreSQL is running\n\
                        2. Verify DATABASE_URL is correct\n\
                        3. Check that the database exists and is accessible"
                    );
                    std::process::exit(1);
                }
            }
        }
        None => {
            tracing::info!("Using in-memory search log (set DATABASE_URL for PostgreSQL)");
            Arc::new(MemorySearchLog::new())
        }
    };

    let state = Arc::new(AppState::new(Arc::new(predictor), search_log));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Connect to PostgreSQL and make sure the searches table exists
async fn init_postgres_storage(database_url: &str) -> Result<Arc<dyn SearchLogStore>, String> {
    let config = PostgresConfig::from_database_url(database_url)
        .map_err(|e| format!("Invalid DATABASE_URL: {}", e))?;

    let store = PostgresStore::with_schema(config)
        .await
        .map_err(|e| format!("Connection failed: {}", e))?;

    Ok(Arc::new(store))
}
