use prs_core::models::{PriceQuery, PriceRecord, PriceRecordDto};
use prs_sqlite::{Db, config::SqliteConfig};
use rust_decimal::Decimal;

/// A fresh in-memory database holding the reference catalog.
pub async fn seeded() -> Db {
    Db::open(&SqliteConfig::default()).await.unwrap()
}

/// A fresh in-memory database with no data.
pub async fn empty() -> Db {
    let config = SqliteConfig {
        seed: false,
        ..Default::default()
    };
    Db::open(&config).await.unwrap()
}

pub fn query(product: i64, brand: i64, at: time::PrimitiveDateTime) -> PriceQuery {
    PriceQuery::new(
        product.try_into().unwrap(),
        brand.try_into().unwrap(),
        at,
    )
}

pub fn record(
    id: i64,
    brand_id: i64,
    start_date: time::PrimitiveDateTime,
    end_date: time::PrimitiveDateTime,
    priority: i64,
    price: Decimal,
) -> PriceRecord {
    PriceRecord::new(PriceRecordDto {
        id,
        product_id: 35455,
        brand_id,
        start_date,
        end_date,
        price_list: id,
        priority,
        price,
        currency: "EUR".to_owned(),
    })
    .unwrap()
}
