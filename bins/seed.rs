//! One-shot database seeding: wipes and repopulates the property listings
//! and company info with the launch content. Run manually, never from the
//! API process:
//!
//! ```text
//! MONGO_URL=mongodb://localhost:27017 DB_NAME=golden_citizen cargo run --bin seed
//! ```

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use models::db::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;
    info!(db = %cfg.store.db_name, "starting database seeding");

    let store = Store::connect(&cfg.store)
        .await
        .context("failed to connect to the document store")?;

    let summary = models::seed::run(&store)
        .await
        .context("seeding failed")?;

    info!(
        properties = summary.properties,
        company_records = summary.company_records,
        "seeding completed"
    );

    store.shutdown().await;
    Ok(())
}
