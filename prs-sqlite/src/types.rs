//! Type definitions for the SQLite implementation.
//!
//! This module contains the bridge types between `prs-core`'s models and how
//! SQLite stores them: a [`DateTime`] wrapper stored as ISO-8601 text, and the
//! internal row type used to load price records.

use prs_core::models::{PriceRecord, PriceRecordDto, ValidationError};
use rust_decimal::Decimal;

mod datetime;
pub use datetime::DateTime;

/// Why a stored row could not be turned into a price record.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// The `price` column is not a decimal number
    #[error("invalid stored amount {0:?}: {1}")]
    Amount(String, #[source] rust_decimal::Error),
    /// The row violates an invariant of the model
    #[error("invalid price row {0}: {1}")]
    Invalid(i64, #[source] ValidationError),
}

#[derive(sqlx::FromRow)]
pub(crate) struct PriceRow {
    pub id: i64,
    pub product_id: i64,
    pub brand_id: i64,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub price_list: i64,
    pub priority: i64,
    pub price: String,
    pub currency: String,
}

impl TryFrom<PriceRow> for PriceRecord {
    type Error = RowError;

    fn try_from(row: PriceRow) -> Result<Self, Self::Error> {
        let price: Decimal = row
            .price
            .parse()
            .map_err(|err| RowError::Amount(row.price.clone(), err))?;

        PriceRecord::new(PriceRecordDto {
            id: row.id,
            product_id: row.product_id,
            brand_id: row.brand_id,
            start_date: row.start_date.into(),
            end_date: row.end_date.into(),
            price_list: row.price_list,
            priority: row.priority,
            price,
            currency: row.currency,
        })
        .map_err(|err| RowError::Invalid(row.id, err))
    }
}
