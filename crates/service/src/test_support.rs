#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    // only a missing config.toml falls back to DATABASE_URL
    let mut cfg = DatabaseConfig::load().expect("invalid database configuration");
    cfg.min_connections = 1;
    cfg.connect_timeout = std::time::Duration::from_secs(5);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    cfg
}

/// Live connection for DB-backed tests; `None` when `SKIP_DB_TESTS` is set
/// or the database cannot be reached.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    // Run migrations exactly once, with a throwaway connection
    let ready = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = connect_with_config(&test_config()).await else {
                eprintln!("skip: cannot connect to db");
                return false;
            };
            migration::Migrator::up(&db, None).await.is_ok()
        })
        .await;
    if !ready {
        return None;
    }
    // Return a fresh connection for the current test's runtime
    connect_with_config(&test_config()).await.ok()
}
