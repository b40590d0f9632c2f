use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Host/port from the validated config.
fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}:{}: {e}", cfg.host, cfg.port)))
}

/// Build the pool and, when configured, bring the schema up to date.
pub async fn prepare_database(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.into())
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(event = "migrations_applied", "schema up to date");
    }
    Ok(db)
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = configs::AppConfig::load_or_env()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = prepare_database(&cfg.database).await?;

    let cors = routes::build_cors(&cfg.cors);
    let app: Router = routes::build_router(AppState::new(db.clone()), cors);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
        })
        .await?;

    db.close().await?;
    Ok(())
}
