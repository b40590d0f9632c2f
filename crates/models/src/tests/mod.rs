//! Database-backed tests. They need a reachable Postgres behind
//! `DATABASE_URL`; set `SKIP_DB_TESTS` to skip them.




use chrono::{TimeZone, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Set};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::db::{connect_with_config, DatabaseConfig};
use crate::{business, service, service_category, user};

static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connection for the current test, or `None` when the database is not
/// available. Migrations run once per process on a throwaway pool.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let mut cfg = DatabaseConfig::from_env();
    cfg.min_connections = 1;
    cfg.connect_timeout = std::time::Duration::from_secs(5);
    cfg.acquire_timeout = std::time::Duration::from_secs(5);

    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&cfg).await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    connect_with_config(&cfg).await.ok()
}

/// Minimal rows a booking needs: a business, a user and `n` services.
pub(crate) struct Fixture {
    pub business: business::Model,
    pub user: user::Model,
    pub services: Vec<service::Model>,
}

pub(crate) async fn fixture<C: ConnectionTrait>(db: &C, n: usize) -> anyhow::Result<Fixture> {
    let business = business::ActiveModel {
        name: Set(format!("fixture_business_{}", Uuid::new_v4())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let user = user::ActiveModel {
        first_name: Set("Test".into()),
        last_name: Set("User".into()),
        email: Set(format!("fixture_{}@example.com", Uuid::new_v4())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let category = service_category::ActiveModel {
        name: Set("Fixture category".into()),
        business_id: Set(business.id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut services = Vec::with_capacity(n);
    for i in 0..n {
        let s = service::ActiveModel {
            name: Set(format!("Fixture service {}", i)),
            duration_mins: Set(30),
            price: Set(50 + i as i32),
            service_category_id: Set(category.id),
            ..Default::default()
        }
        .insert(db)
        .await?;
        services.push(s);
    }

    Ok(Fixture { business, user, services })
}

pub(crate) fn slot(day: u32, hour: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(2025, 12, day, hour, 0, 0).unwrap().into()
}
