use std::fs::File;

use prs_axum::{router, start_server};
use prs_sqlite::Db;
use prsdemo::{AppConfig, Cli, impls::DemoApp};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we likely want to subscribe to these events so we can
    // write them to stdio and possibly some durable location.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Create config with proper layering of CLI args
    let AppConfig { server, database } = AppConfig::load(&cli)?;

    // Open database with config
    let db = Db::open(&database).await?;
    let app = DemoApp { db };

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let (_, schema) = router(app);
        serde_json::to_writer_pretty(File::create(path)?, schema.as_ref())?;
        return Ok(());
    }

    tracing::info!(seeded = database.seed, "catalog ready");
    start_server(server, app).await?;

    Ok(())
}
