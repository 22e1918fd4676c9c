use super::{
    Amount, BrandId, Currency, DateTime, PriceId, PriceListId, PriceQuery, PriceView, ProductId,
    ValidationError, ValidityWindow,
};
use rust_decimal::Decimal;

/// The weight of a price record when windows overlap. Higher wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct Priority(i64);

impl Priority {
    /// The raw priority value
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            Err(ValidationError::NegativePriority(value))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Priority> for i64 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single entry of the price catalog.
///
/// A price record states that, for a product of a brand, `amount` in `currency`
/// applies during `window`, as part of price list `price_list`. When the windows
/// of several records overlap, `priority` decides which one applies.
///
/// Price records are immutable. They are constructed from a [`PriceRecordDto`]
/// which is validated as a whole, so a `PriceRecord` always satisfies every
/// invariant of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PriceRecordDto", into = "PriceRecordDto")
)]
pub struct PriceRecord {
    id: PriceId,
    product_id: ProductId,
    brand_id: BrandId,
    window: ValidityWindow,
    price_list: PriceListId,
    priority: Priority,
    amount: Amount,
    currency: Currency,
}

impl PriceRecord {
    /// Creates a new price record with validation
    pub fn new(dto: PriceRecordDto) -> Result<Self, ValidationError> {
        Self::try_from(dto)
    }

    /// The record's identifier
    pub fn id(&self) -> PriceId {
        self.id
    }

    /// The product this price is for
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// The brand selling the product at this price
    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    /// When this price applies
    pub fn window(&self) -> ValidityWindow {
        self.window
    }

    /// The price list (tariff) the record belongs to
    pub fn price_list(&self) -> PriceListId {
        self.price_list
    }

    /// The weight used to break overlaps
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The final price
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The currency of `amount`
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Whether this record's window contains `at`
    pub fn is_applicable_for(&self, at: DateTime) -> bool {
        self.window.contains(at)
    }

    /// Whether this record answers `query`: same product and brand, and a
    /// window containing the query instant.
    pub fn applies_to(&self, query: &PriceQuery) -> bool {
        self.product_id == query.product_id
            && self.brand_id == query.brand_id
            && self.is_applicable_for(query.at)
    }

    /// Project the record onto the fields exposed to clients
    pub fn to_view(&self) -> PriceView {
        PriceView {
            product_id: self.product_id,
            brand_id: self.brand_id,
            price_list: self.price_list,
            start_date: self.window.start(),
            end_date: self.window.end(),
            price: self.amount,
        }
    }
}

/// A DTO to ensure that we always validate when we construct from an untrusted source.
///
/// This mirrors the columns of the catalog table: plain integers, a decimal and
/// a string. Converting it into a [`PriceRecord`] runs every check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PriceRecordDto {
    /// Record identifier (positive)
    pub id: i64,
    /// Product identifier (positive)
    pub product_id: i64,
    /// Brand identifier (positive)
    pub brand_id: i64,
    /// First instant of validity
    #[cfg_attr(feature = "serde", serde(with = "super::iso_local"))]
    pub start_date: DateTime,
    /// Last instant of validity, not before `start_date`
    #[cfg_attr(feature = "serde", serde(with = "super::iso_local"))]
    pub end_date: DateTime,
    /// Price list identifier (positive)
    pub price_list: i64,
    /// Priority (non-negative)
    pub priority: i64,
    /// Amount (strictly positive)
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    pub price: Decimal,
    /// Currency code (non-blank)
    pub currency: String,
}

impl TryFrom<PriceRecordDto> for PriceRecord {
    type Error = ValidationError;

    fn try_from(value: PriceRecordDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.try_into()?,
            product_id: value.product_id.try_into()?,
            brand_id: value.brand_id.try_into()?,
            window: ValidityWindow::new(value.start_date, value.end_date)?,
            price_list: value.price_list.try_into()?,
            priority: value.priority.try_into()?,
            amount: value.price.try_into()?,
            currency: value.currency.try_into()?,
        })
    }
}

impl From<PriceRecord> for PriceRecordDto {
    fn from(value: PriceRecord) -> Self {
        Self {
            id: value.id.into(),
            product_id: value.product_id.into(),
            brand_id: value.brand_id.into(),
            start_date: value.window.start(),
            end_date: value.window.end(),
            price_list: value.price_list.into(),
            priority: value.priority.into(),
            price: value.amount.into(),
            currency: value.currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    fn dto() -> PriceRecordDto {
        PriceRecordDto {
            id: 1,
            product_id: 35455,
            brand_id: 1,
            start_date: datetime!(2020-06-14 00:00),
            end_date: datetime!(2020-12-31 23:59:59),
            price_list: 1,
            priority: 0,
            price: dec!(35.50),
            currency: "EUR".to_owned(),
        }
    }

    #[test]
    fn test_valid_record() {
        let record = PriceRecord::new(dto()).unwrap();
        assert_eq!(record.id().get(), 1);
        assert_eq!(record.product_id().get(), 35455);
        assert_eq!(record.brand_id().get(), 1);
        assert_eq!(record.price_list().get(), 1);
        assert_eq!(record.priority().get(), 0);
        assert_eq!(record.amount().get(), dec!(35.50));
        assert_eq!(record.currency().as_str(), "EUR");
        assert_eq!(record.window().start(), datetime!(2020-06-14 00:00));
    }

    #[test]
    fn test_negative_priority_rejected() {
        let result = PriceRecord::new(PriceRecordDto {
            priority: -1,
            ..dto()
        });
        assert_eq!(result.unwrap_err(), ValidationError::NegativePriority(-1));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for price in [dec!(0), dec!(-0.01)] {
            let result = PriceRecord::new(PriceRecordDto { price, ..dto() });
            assert_eq!(result.unwrap_err(), ValidationError::NonPositiveAmount(price));
        }
    }

    #[test]
    fn test_blank_currency_rejected() {
        let result = PriceRecord::new(PriceRecordDto {
            currency: " ".to_owned(),
            ..dto()
        });
        assert_eq!(result.unwrap_err(), ValidationError::BlankCurrency);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let result = PriceRecord::new(PriceRecordDto {
            start_date: datetime!(2020-06-15 00:00),
            end_date: datetime!(2020-06-14 00:00),
            ..dto()
        });
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::InvertedWindow { .. }
        ));
    }

    #[test]
    fn test_non_positive_ids_rejected() {
        assert!(PriceRecord::new(PriceRecordDto { id: 0, ..dto() }).is_err());
        assert!(PriceRecord::new(PriceRecordDto { product_id: -5, ..dto() }).is_err());
        assert!(PriceRecord::new(PriceRecordDto { brand_id: 0, ..dto() }).is_err());
        assert!(PriceRecord::new(PriceRecordDto { price_list: 0, ..dto() }).is_err());
    }

    #[test]
    fn test_applies_to_checks_product_and_brand() {
        let record = PriceRecord::new(dto()).unwrap();
        let at = datetime!(2020-06-14 10:00);
        let query = |product: i64, brand: i64| PriceQuery {
            product_id: product.try_into().unwrap(),
            brand_id: brand.try_into().unwrap(),
            at,
        };

        assert!(record.applies_to(&query(35455, 1)));
        assert!(!record.applies_to(&query(35455, 2)));
        assert!(!record.applies_to(&query(99999, 1)));
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{
            "id": 2, "productId": 35455, "brandId": 1,
            "startDate": "2020-06-14T15:00:00", "endDate": "2020-06-14T18:30:00",
            "priceList": 2, "priority": 1, "price": 25.45, "currency": "EUR"
        }"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount().get(), dec!(25.45));
        assert_eq!(record.window().end(), datetime!(2020-06-14 18:30));

        let json = json.replace("\"priority\": 1", "\"priority\": -1");
        assert!(serde_json::from_str::<PriceRecord>(&json).is_err());
    }
}
