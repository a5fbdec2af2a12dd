//! Splitwise Backend Server
//!
//! Serves the user directory and health check.

use splitwise_backend::api::create_router;
use splitwise_backend::config::Config;
use splitwise_backend::db::{DatabasePool, User};
use splitwise_backend::models::{HealthResponse, UsersListResponse};
use splitwise_backend::state::AppState;
use splitwise_backend::templates::init_templates;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        splitwise_backend::api::handlers::health_check,
        splitwise_backend::api::handlers::list_users,
    ),
    components(schemas(HealthResponse, UsersListResponse, User)),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User directory"),
    ),
    info(
        title = "Splitwise Backend API",
        version = "0.1.0",
        description = "User directory backed by PostgreSQL",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application");

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(err) if err.not_found() => info!("No .env file found, using process environment"),
        Err(err) => warn!(error = %err, "Failed to load .env file"),
    }

    let config = Config::from_env()?;
    let templates = init_templates(&config.templates.dir)?;

    let db = DatabasePool::connect(&config.database.url).await?;
    info!("Database connection successful");

    let state = Arc::new(AppState::new(db.clone(), templates));

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;

    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
