use prs_core::models::{format_datetime, parse_datetime};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Encode, Sqlite, Type};

/// This type acts as a bridge between `prs-core`'s instants and how SQLite
/// stores them. Whenever we read or store an instant, it should go through
/// this wrapper so that every row uses the same, ordered text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(pub prs_core::models::DateTime);

impl From<prs_core::models::DateTime> for DateTime {
    fn from(value: prs_core::models::DateTime) -> Self {
        Self(value)
    }
}

impl From<DateTime> for prs_core::models::DateTime {
    fn from(value: DateTime) -> Self {
        value.0
    }
}

// Tell SQLx that DateTime should be treated as a TEXT type in SQLite
impl Type<Sqlite> for DateTime {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for DateTime {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        let text = format_datetime(self.0)?;
        <String as Encode<'q, Sqlite>>::encode(text, buf)
    }
}

impl<'r> Decode<'r, Sqlite> for DateTime {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self(parse_datetime(text)?))
    }
}
