use anyhow::{Context, Result};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{HttpClassifier, InMemoryMessageRepository, PgMessageRepository};
use application::{IngestionService, ListingService};
use config::{ServerConfig, StoreBackend};
use spamlens::{Classifier, MessageRepository};

/// Type aliases for application services over injected ports
pub type AppIngestionService = IngestionService<dyn MessageRepository, dyn Classifier>;
pub type AppListingService = ListingService<dyn MessageRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<AppIngestionService>,
    pub listing: Arc<AppListingService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn MessageRepository>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            ingestion: Arc::new(IngestionService::new(repo.clone(), classifier)),
            listing: Arc::new(ListingService::new(repo)),
        }
    }
}

/// Assemble every route with shared middleware
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::status::router())
        .merge(routes::message::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the configured store. Any connection or migration failure is fatal.
async fn connect_store(config: &ServerConfig) -> Result<Arc<dyn MessageRepository>> {
    match config.store_backend() {
        StoreBackend::Memory => {
            tracing::warn!("⚠️  DATABASE_URL=memory:// - messages are not persisted");
            Ok(Arc::new(InMemoryMessageRepository::new()))
        }
        StoreBackend::Postgres(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(&url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("✅ Database connected");

            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("✅ Database migrations completed");

            Ok(Arc::new(PgMessageRepository::new(pool)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("🛡️  SpamLens API initializing...");

    let config = ServerConfig::from_env()?;

    let repo = match connect_store(&config).await {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!("❌ Storage unavailable: {:#}", e);
            return Err(e);
        }
    };

    match repo.count().await {
        Ok(n) => tracing::info!("📨 {} messages stored", n),
        Err(e) => tracing::warn!("⚠️  Could not count stored messages: {}", e),
    }

    let classifier = HttpClassifier::new(&config.classifier_url, config.classifier_timeout)
        .context("Failed to build classifier HTTP client")?;

    if classifier.health().await {
        tracing::info!("🔬 Classifier reachable at {}", classifier.base_url());
    } else {
        tracing::warn!(
            "⚠️  Classifier not reachable at {} - submissions will fail until it is up",
            classifier.base_url()
        );
    }

    let state = AppState::new(repo, Arc::new(classifier));
    let router = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("🚀 Server listening on port {}", config.port);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
