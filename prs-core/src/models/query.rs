use super::{Amount, BrandId, DateTime, PriceListId, ProductId};

/// The inputs of a single price resolution.
///
/// Since the identifiers can only be built from valid values, a `PriceQuery`
/// is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery {
    /// The product being priced
    pub product_id: ProductId,
    /// The brand selling the product
    pub brand_id: BrandId,
    /// The instant at which the price must apply
    pub at: DateTime,
}

impl PriceQuery {
    /// Convenience constructor
    pub fn new(product_id: ProductId, brand_id: BrandId, at: DateTime) -> Self {
        Self {
            product_id,
            brand_id,
            at,
        }
    }
}

/// The applicable price, as reported to clients.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PriceView {
    /// Product identifier
    pub product_id: ProductId,
    /// Brand identifier
    pub brand_id: BrandId,
    /// Price list (tariff) the applied price comes from
    pub price_list: PriceListId,
    /// Start of the applied price's validity
    #[cfg_attr(feature = "serde", serde(with = "super::iso_local"))]
    #[cfg_attr(feature = "schemars", schemars(schema_with = "local_datetime_schema"))]
    pub start_date: DateTime,
    /// End of the applied price's validity
    #[cfg_attr(feature = "serde", serde(with = "super::iso_local"))]
    #[cfg_attr(feature = "schemars", schemars(schema_with = "local_datetime_schema"))]
    pub end_date: DateTime,
    /// Final price to apply
    pub price: Amount,
}

/// Schema for ISO local date-times, which `schemars` cannot derive for `time` types.
#[cfg(feature = "schemars")]
fn local_datetime_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "format": "date-time",
        "examples": ["2020-06-14T00:00:00"],
    })
}
