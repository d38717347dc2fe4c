use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Connect, verify and (unless `SKIP_MIGRATIONS` is set) migrate the database.
pub async fn prepare_database(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if std::env::var("SKIP_MIGRATIONS").is_ok() {
        warn!("migrations_skipped");
    } else {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations_applied");
    }
    Ok(db)
}

/// Bind `host:port`; host names are resolved, not only IP literals.
pub async fn bind_listener(server: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind(server.bind_addr()).await
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), routes::build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl_c_listener_failed");
        std::future::pending::<()>().await;
    }
    info!("shutdown_signal_received");
}

/// Public entry: load config, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db);

    let listener = bind_listener(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server_stopped");
    Ok(())
}
