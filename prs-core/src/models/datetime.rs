//! Textual representation of instants.
//!
//! Instants are written as ISO-8601 local date-times without an offset, e.g.
//! `2020-06-14T10:00:00`. Fractional seconds are only written when present, and
//! then with the minimal number of digits. With fixed-width years this keeps
//! the textual form ordered the same way as the instants themselves, which the
//! storage layer relies on for range filtering.

use super::DateTime;
use time::{format_description::BorrowedFormatItem, macros::format_description};

const WHOLE_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const FRACTIONAL_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

// Seconds and fractions are both optional on input.
const LENIENT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);

/// Format an instant as `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn format_datetime(value: DateTime) -> Result<String, time::error::Format> {
    if value.nanosecond() == 0 {
        value.format(WHOLE_SECONDS)
    } else {
        value.format(FRACTIONAL_SECONDS)
    }
}

/// Parse an ISO-8601 local date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DDTHH:MM:SS.fff…`.
pub fn parse_datetime(value: &str) -> Result<DateTime, time::error::Parse> {
    DateTime::parse(value, LENIENT)
}

/// Serde adapter for [`DateTime`] fields using the ISO local format.
#[cfg(feature = "serde")]
pub mod iso_local {
    use super::{DateTime, format_datetime, parse_datetime};
    use serde::{Deserialize as _, Deserializer, Serializer, de, ser};

    /// Serialize an instant as an ISO local date-time string.
    pub fn serialize<S: Serializer>(value: &DateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = format_datetime(*value).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserialize an instant from an ISO local date-time string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        let text = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
        parse_datetime(&text).map_err(de::Error::custom)
    }
}
