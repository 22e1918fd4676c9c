#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the prs-sqlite crate.
//! [prs_core]: https://docs.rs/prs_core/latest/prs_core/index.html
//! [prs_sqlite]: https://docs.rs/prs_sqlite/latest/prs_sqlite/index.html
#![doc = include_str!("../README.md")]

use prs_core::models::{BrandId, PriceRecord};
use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use tokio::try_join;
use tracing::{Level, event};

pub mod config;
mod r#impl;
pub mod types;

use config::SqliteConfig;

/// SQLite database implementation of the price catalog.
///
/// This struct provides separate reader and writer connection pools to a SQLite database,
/// implementing the repository traits defined in `prs-core`. The separation of read
/// and write connections allows for better concurrency control and follows SQLite best
/// practices for Write-Ahead Logging (WAL) mode.
///
/// # Connection Management
///
/// - `reader`: A connection pool for read operations, allowing concurrent reads
/// - `writer`: A single-connection pool for write operations, ensuring serialized writes
///
/// # Example
///
/// ```no_run
/// # use prs_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SqliteConfig::default();
/// let db = Db::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing` is true),
    /// applies all pending migrations and, when `seed` is true, loads the
    /// reference catalog.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - Database connection fails
    /// - Migrations fail to apply
    /// - Seeding fails
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .pragma("temp_store", "memory")
                .create_if_missing(config.create_if_missing);

        // An in-memory database lives as long as one connection to it stays
        // open, so the writer never lets its only connection go.
        let reader = sqlite::SqlitePoolOptions::new().connect_with(options.clone());
        let writer = sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        // Run any pending migrations before returning
        sqlx::migrate!("./schema").run(&writer).await?;

        let db = Self { reader, writer };
        if config.seed {
            db.seed().await?;
        }

        Ok(db)
    }

    /// Load the reference catalog: brand `1` and four prices of product `35455`.
    ///
    /// Rows that already exist are left untouched, so seeding twice is harmless.
    pub async fn seed(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(include_str!("../seed/reference_prices.sql"))
            .execute(&self.writer)
            .await?;
        event!(Level::DEBUG, "reference catalog loaded");
        Ok(())
    }

    /// Register a brand, so that prices can refer to it.
    pub async fn create_brand(&self, brand_id: BrandId, name: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            insert into
                brand (id, name)
            values
                ($1, $2)
            "#,
        )
        .bind(brand_id.get())
        .bind(name)
        .execute(&self.writer)
        .await?;

        Ok(())
    }

    /// Add a price record to the catalog.
    ///
    /// The record's brand must exist.
    pub async fn insert_price(&self, record: &PriceRecord) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            insert into
                price (id, brand_id, product_id, start_date, end_date, price_list, priority, price, currency)
            values
                ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id().get())
        .bind(record.brand_id().get())
        .bind(record.product_id().get())
        .bind(types::DateTime(record.window().start()))
        .bind(types::DateTime(record.window().end()))
        .bind(record.price_list().get())
        .bind(record.priority().get())
        .bind(record.amount().get().to_string())
        .bind(record.currency().as_str())
        .execute(&self.writer)
        .await?;

        Ok(())
    }
}
