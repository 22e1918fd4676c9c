//! Strongly-typed identifiers for catalog entities.
//!
//! Storage hands out plain integers; wrapping them in distinct types prevents
//! mixing a brand id up with a product id at compile time. Every identifier is
//! strictly positive, and the only way to obtain one is through
//! `TryFrom<i64>`, which enforces that.

use super::ValidationError;

macro_rules! positive_id {
    ($struct:ident, $field:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "i64", into = "i64")
        )]
        pub struct $struct(i64);

        impl $struct {
            /// The raw integer value
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $struct {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::NonPositiveId {
                        field: $field,
                        value,
                    })
                }
            }
        }

        impl From<$struct> for i64 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        // `schemars` does not understand serde's try_from, so spell the schema out.
        #[cfg(feature = "schemars")]
        impl schemars::JsonSchema for $struct {
            fn inline_schema() -> bool {
                true
            }

            fn schema_name() -> std::borrow::Cow<'static, str> {
                stringify!($struct).into()
            }

            fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
                schemars::json_schema!({
                    "type": "integer",
                    "format": "int64",
                    "minimum": 1,
                })
            }
        }
    };
}

positive_id!(PriceId, "Price ID", "Unique identifier of a price record");
positive_id!(ProductId, "Product ID", "Identifier of a product in the catalog");
positive_id!(BrandId, "Brand ID", "Identifier of the brand (chain) selling a product");
positive_id!(
    PriceListId,
    "Price list",
    "Identifier of the price list (tariff) a price record belongs to"
);
