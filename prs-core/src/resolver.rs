use crate::models::{BrandId, DateTime, PriceQuery, PriceRecord, ProductId, format_datetime};
use std::cmp::Ordering;

/// No price record applies to a query.
///
/// This is an expected outcome (e.g. a query outside every published window),
/// not an internal failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "No price found for product {product_id}, brand {brand_id} at {}",
    iso(.at)
)]
pub struct PriceNotFound {
    /// The queried product
    pub product_id: ProductId,
    /// The queried brand
    pub brand_id: BrandId,
    /// The queried instant
    pub at: DateTime,
}

impl From<&PriceQuery> for PriceNotFound {
    fn from(query: &PriceQuery) -> Self {
        Self {
            product_id: query.product_id,
            brand_id: query.brand_id,
            at: query.at,
        }
    }
}

fn iso(at: &DateTime) -> String {
    format_datetime(*at).unwrap_or_else(|_| at.to_string())
}

/// Select the single price record that applies to `query`.
///
/// Candidates are usually pre-filtered by storage, but that filter is not
/// trusted: every candidate is checked again against the query's product,
/// brand and instant (bounds inclusive). Among the survivors the highest
/// priority wins. Equal priorities are broken by the lowest record id, which
/// makes the choice independent of the order of `candidates`.
pub fn resolve<I>(candidates: I, query: &PriceQuery) -> Result<PriceRecord, PriceNotFound>
where
    I: IntoIterator<Item = PriceRecord>,
{
    candidates
        .into_iter()
        .filter(|record| record.applies_to(query))
        .max_by(precedence)
        .ok_or_else(|| PriceNotFound::from(query))
}

// Greater means "takes precedence".
fn precedence(a: &PriceRecord, b: &PriceRecord) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| b.id().cmp(&a.id()))
}
