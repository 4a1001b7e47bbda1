use std::time::Duration;

use anyhow::Result;
use dotenv::dotenv;
use sqlx::PgPool;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared_config::AppConfig;
use shared_database::warehouse::WarehouseClient;
use shared_database::postgres;

/// Batch job copying vaccination fields from the analytics warehouse into
/// the patient store. It only ever writes `vaccine_type` / `vaccine_count`,
/// keyed by KTP number; everything else in the store belongs to the API.
#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Klinik vaccination sync");

    let config = AppConfig::from_env();
    if !config.is_warehouse_configured() {
        error!("Warehouse environment variables are not set, exiting");
        std::process::exit(1);
    }

    let pool = postgres::connect(&config)
        .await
        .expect("failed to connect to database");
    let warehouse = WarehouseClient::new(&config);

    let mut ticker = tokio::time::interval(Duration::from_secs(config.sync_interval_seconds));
    loop {
        ticker.tick().await;
        if let Err(err) = sync_patients(&warehouse, &pool).await {
            // Keep the job alive; the next tick retries from scratch.
            error!("Vaccination sync failed: {}", err);
        }
    }
}

async fn sync_patients(warehouse: &WarehouseClient, pool: &PgPool) -> Result<()> {
    info!("Fetching vaccination records from warehouse");
    let records = warehouse.fetch_vaccination_records().await?;

    let mut updated = 0u64;
    let mut unmatched = 0u64;

    let mut conn = pool.acquire().await?;
    for record in &records {
        let rows = patient_cell::repository::update_vaccination(
            &mut conn,
            &record.no_ktp,
            record.vaccine_type.as_deref(),
            record.vaccine_count,
        )
        .await?;

        if rows == 0 {
            unmatched += 1;
        } else {
            updated += rows;
        }
    }

    if unmatched > 0 {
        warn!("{} warehouse rows had no matching patient", unmatched);
    }
    info!(
        "Vaccination sync finished: {} patients updated from {} warehouse rows",
        updated,
        records.len()
    );

    Ok(())
}
