//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of the repository traits defined in
//! `prs-core` for the SQLite database backend.

use crate::Db;
use prs_core::ports::Repository;

mod price;

impl Repository for Db {
    type Error = sqlx::Error;
}
