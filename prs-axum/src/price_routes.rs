//! REST API endpoint for price queries.
//!
//! The query parameters are taken as raw strings and parsed here, so that a
//! missing or malformed parameter produces a precise message instead of a
//! generic extractor rejection. Query strings the extractor cannot read at all
//! are still answered with an [`ErrorResponse`].

use crate::{
    ApiApplication,
    error::{ApiError, ErrorResponse},
};
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use prs_core::{
    models::{BrandId, PriceQuery, PriceView, ProductId, parse_datetime},
    service::{self, PricingError},
};
use serde::Deserialize;
use tracing::{Level, event};

/// Where the price endpoint is mounted.
pub(crate) const PRICES_PATH: &str = "/api/prices";

/// Query parameters of a price lookup. All of them are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceParams {
    application_date: Option<String>,
    product_id: Option<String>,
    brand_id: Option<String>,
}

// Documents the parameters as the handler validates them, not as raw strings.
impl schemars::JsonSchema for PriceParams {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "PriceParams".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "object",
            "properties": {
                "applicationDate": {
                    "description": "Instant to price, as an ISO-8601 local date-time",
                    "type": "string",
                    "format": "date-time",
                    "examples": ["2020-06-14T10:00:00"],
                },
                "productId": {
                    "description": "Product identifier, a positive integer",
                    "type": "integer",
                    "format": "int64",
                    "minimum": 1,
                    "examples": [35455],
                },
                "brandId": {
                    "description": "Brand identifier, a positive integer",
                    "type": "integer",
                    "format": "int64",
                    "minimum": 1,
                    "examples": [1],
                },
            },
            "required": ["applicationDate", "productId", "brandId"],
        })
    }
}

impl PriceParams {
    /// Parameters are checked in order; the first problem is reported.
    fn into_query(self) -> Result<PriceQuery, ApiError> {
        let at = parse_param("applicationDate", self.application_date, "date-time", parse_datetime)?;
        let product_id = parse_param("productId", self.product_id, "integer", str::parse::<i64>)?;
        let brand_id = parse_param("brandId", self.brand_id, "integer", str::parse::<i64>)?;

        let product_id = ProductId::try_from(product_id)
            .map_err(|err| ApiError::bad_request(err.to_string(), PRICES_PATH))?;
        let brand_id = BrandId::try_from(brand_id)
            .map_err(|err| ApiError::bad_request(err.to_string(), PRICES_PATH))?;

        Ok(PriceQuery::new(product_id, brand_id, at))
    }
}

fn parse_param<V, E>(
    name: &str,
    value: Option<String>,
    expected: &str,
    parse: impl FnOnce(&str) -> Result<V, E>,
) -> Result<V, ApiError> {
    let value = value.ok_or_else(|| {
        ApiError::bad_request(format!("Required parameter '{name}' is missing"), PRICES_PATH)
    })?;

    parse(&value).map_err(|_| {
        ApiError::bad_request(
            format!("Invalid value '{value}' for parameter '{name}'. Expected type: {expected}"),
            PRICES_PATH,
        )
    })
}

/// Creates a router with the price endpoint.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new().api_route("/prices", get_with(get_price::<T>, get_price_docs))
}

fn get_price_docs(op: TransformOperation<'_>) -> TransformOperation<'_> {
    op.summary("Get applicable price")
        .description("Retrieves the price that applies to a product of a brand at a specific date and time. When several prices apply, the one with the highest priority wins.")
        .tag("prices")
        .response_with::<200, Json<PriceView>, _>(|res| res.description("Price found"))
        .response_with::<400, Json<ErrorResponse>, _>(|res| {
            res.description("Missing or invalid request parameters")
        })
        .response_with::<404, Json<ErrorResponse>, _>(|res| {
            res.description("No applicable price found")
        })
        .response_with::<500, Json<ErrorResponse>, _>(|res| {
            res.description("Internal server error")
        })
}

/// Retrieve the price applying to a product of a brand at an instant.
///
/// # Returns
///
/// - `200 OK`: The applicable price
/// - `400 Bad Request`: A parameter is missing, malformed or not positive
/// - `404 Not Found`: No price applies
/// - `500 Internal Server Error`: Database query failed
async fn get_price<T: ApiApplication>(
    State(app): State<T>,
    params: Result<Query<PriceParams>, QueryRejection>,
) -> Result<Json<PriceView>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::bad_request(rejection.body_text(), PRICES_PATH))?;
    let query = params.into_query()?;

    service::get_price(app.database(), query)
        .await
        .map(Json)
        .map_err(|err| match err {
            PricingError::NotFound(err) => {
                event!(Level::INFO, err = err.to_string());
                ApiError::new(StatusCode::NOT_FOUND, err.to_string(), PRICES_PATH)
            }
            PricingError::Infrastructure(err) => {
                event!(Level::ERROR, err = err.to_string());
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred",
                    PRICES_PATH,
                )
            }
        })
}
