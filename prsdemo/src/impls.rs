//! Application implementation backed by SQLite.

use prs_core::ports::Application;
use prs_sqlite::Db;

/// The demo application: the price catalog lives in a SQLite database.
#[derive(Clone)]
pub struct DemoApp {
    /// The catalog
    pub db: Db,
}

impl Application for DemoApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }
}
