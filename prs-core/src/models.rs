mod datetime;
mod error;
mod ids;
mod money;
mod price;
mod query;
mod window;

pub use datetime::{format_datetime, parse_datetime};
#[cfg(feature = "serde")]
pub use datetime::iso_local;
pub use error::ValidationError;
pub use ids::{BrandId, PriceId, PriceListId, ProductId};
pub use money::{Amount, Currency};
pub use price::{PriceRecord, PriceRecordDto, Priority};
pub use query::{PriceQuery, PriceView};
pub use window::ValidityWindow;

/// The instant type used for validity windows and queries.
///
/// Price lists are published in local time without an offset, so instants are
/// naive date-times and are compared as such.
pub type DateTime = time::PrimitiveDateTime;
