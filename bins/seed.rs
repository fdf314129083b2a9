//! Load the demo restaurants and pizzas.
//!
//! `seed` leaves a non-empty database untouched; `seed --force` wipes it first.
use std::process::ExitCode;

use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing::{error, info};

async fn seed(force: bool) -> anyhow::Result<()> {
    let db = models::db::connect().await?;
    Migrator::up(&db, None).await?;

    let report = service::seed::seed_demo_data(&db, force).await?;
    if report.skipped {
        info!("database already has restaurants; rerun with --force to replace them");
    } else {
        info!(
            restaurants = report.restaurants,
            pizzas = report.pizzas,
            restaurant_pizzas = report.offerings,
            "seeded demo data"
        );
    }
    db.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let force = std::env::args().skip(1).any(|a| a == "--force");
    match seed(force).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "seed failed");
            ExitCode::FAILURE
        }
    }
}
