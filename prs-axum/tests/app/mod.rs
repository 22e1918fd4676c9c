use prs_core::{
    models::{BrandId, DateTime, PriceRecord, ProductId},
    ports::{Application, PriceRepository, Repository},
};
use prs_sqlite::{Db, config::SqliteConfig};

/// The demo wiring: a seeded in-memory SQLite catalog.
#[derive(Clone)]
pub struct TestApp(pub Db);

impl TestApp {
    pub async fn seeded() -> Self {
        Self(Db::open(&SqliteConfig::default()).await.unwrap())
    }
}

impl Application for TestApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.0
    }
}

/// An application whose storage is always down.
#[derive(Clone)]
pub struct OfflineApp(pub Offline);

#[derive(Clone)]
pub struct Offline;

#[derive(Debug)]
pub struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("database is unavailable")
    }
}

impl std::error::Error for Unavailable {}

impl Repository for Offline {
    type Error = Unavailable;
}

impl PriceRepository for Offline {
    async fn find_candidates(
        &self,
        _product_id: ProductId,
        _brand_id: BrandId,
        _at: DateTime,
    ) -> Result<Vec<PriceRecord>, Self::Error> {
        Err(Unavailable)
    }
}

impl Application for OfflineApp {
    type Repository = Offline;

    fn database(&self) -> &Self::Repository {
        &self.0
    }
}
