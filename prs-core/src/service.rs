//! The price query use case.
//!
//! [`get_price`] glues a [`PriceRepository`] to the pure [`resolve`] rule: it
//! fetches the candidates, picks the winner and projects it for clients.

use crate::{
    PriceNotFound,
    models::{PriceQuery, PriceView},
    ports::PriceRepository,
    resolve,
};
use tracing::{Level, event};

/// Why a price query could not be answered.
#[derive(Debug, thiserror::Error)]
pub enum PricingError<E: std::error::Error + 'static> {
    /// No record applies to the query
    #[error(transparent)]
    NotFound(#[from] PriceNotFound),
    /// The repository failed
    #[error("price repository failure: {0}")]
    Infrastructure(#[source] E),
}

/// Resolve the price applying to `query`, using `db` as the catalog.
pub async fn get_price<R: PriceRepository>(
    db: &R,
    query: PriceQuery,
) -> Result<PriceView, PricingError<R::Error>> {
    let candidates = db
        .find_candidates(query.product_id, query.brand_id, query.at)
        .await
        .map_err(PricingError::Infrastructure)?;

    event!(
        Level::DEBUG,
        product_id = query.product_id.get(),
        brand_id = query.brand_id.get(),
        candidates = candidates.len(),
        "resolving price"
    );

    let winner = resolve(candidates, &query)?;

    event!(
        Level::DEBUG,
        price_id = winner.id().get(),
        priority = winner.priority().get(),
        "price resolved"
    );

    Ok(winner.to_view())
}
