use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};

fn init_logging() {
    dotenv().ok();
    common::utils::logging::init_logging(common::utils::logging::LogFormat::from_env());
    info!(service = "seed", event = "logger_init", "tracing subscriber initialized");
}

async fn seed() -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env()?;
    let db = models::db::connect_with_config(&(&cfg.database).into()).await?;

    // the seed always needs the schema, whatever run_migrations says
    migration::Migrator::up(&db, None).await?;

    let report = service::seed::run(&db).await?;
    info!(
        service = "seed",
        event = "done",
        business_id = %report.business_id,
        bookings = report.booking_ids.len(),
        "seed data inserted successfully"
    );
    db.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_logging();
    info!(service = "seed", event = "start", version = env!("CARGO_PKG_VERSION"), "seeding sample data");

    match seed().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "error while seeding");
            std::process::ExitCode::FAILURE
        }
    }
}
