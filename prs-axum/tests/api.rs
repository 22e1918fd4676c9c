use axum::http::StatusCode;
use axum_test::TestServer;
use prs_axum::{ErrorResponse, router};
use rstest::*;
use serde_json::{Value, json};

mod app;
use app::{Offline, OfflineApp, TestApp};

async fn server() -> TestServer {
    let (router, _) = router(TestApp::seeded().await);
    TestServer::new(router).unwrap()
}

fn offline_server() -> TestServer {
    let (router, _) = router(OfflineApp(Offline));
    TestServer::new(router).unwrap()
}

async fn get_prices(server: &TestServer, params: &[(&str, &str)]) -> axum_test::TestResponse {
    let mut request = server.get("/api/prices");
    for (name, value) in params {
        request = request.add_query_param(name, value);
    }
    request.await
}

fn params<'a>(date: &'a str, product: &'a str, brand: &'a str) -> [(&'a str, &'a str); 3] {
    [
        ("applicationDate", date),
        ("productId", product),
        ("brandId", brand),
    ]
}

#[rstest]
#[case::day14_at_10("2020-06-14T10:00:00", 1, "2020-06-14T00:00:00", "2020-12-31T23:59:59", 35.50)]
#[case::day14_at_16("2020-06-14T16:00:00", 2, "2020-06-14T15:00:00", "2020-06-14T18:30:00", 25.45)]
#[case::day14_at_21("2020-06-14T21:00:00", 1, "2020-06-14T00:00:00", "2020-12-31T23:59:59", 35.50)]
#[case::day15_at_10("2020-06-15T10:00:00", 3, "2020-06-15T00:00:00", "2020-06-15T11:00:00", 30.50)]
#[case::day16_at_21("2020-06-16T21:00:00", 4, "2020-06-15T16:00:00", "2020-12-31T23:59:59", 38.95)]
#[test_log::test(tokio::test)]
async fn test_reference_scenarios(
    #[case] date: &str,
    #[case] price_list: i64,
    #[case] start: &str,
    #[case] end: &str,
    #[case] price: f64,
) {
    let server = server().await;

    let response = get_prices(&server, &params(date, "35455", "1")).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "productId": 35455,
        "brandId": 1,
        "priceList": price_list,
        "startDate": start,
        "endDate": end,
        "price": price,
    }));
}

#[test_log::test(tokio::test)]
async fn test_not_found() {
    let server = server().await;

    let response = get_prices(&server, &params("2019-01-01T10:00:00", "35455", "1")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<ErrorResponse>();
    assert_eq!(body.status, 404);
    assert_eq!(body.path, "/api/prices");
    assert_eq!(
        body.message,
        "No price found for product 35455, brand 1 at 2019-01-01T10:00:00"
    );
    assert!(!body.timestamp.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_unknown_product_not_found() {
    let server = server().await;
    let response = get_prices(&server, &params("2020-06-14T10:00:00", "99999", "1")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_missing_parameter() {
    let server = server().await;

    let response = get_prices(
        &server,
        &[("applicationDate", "2020-06-14T10:00:00"), ("productId", "35455")],
    )
    .await;

    response.assert_status_bad_request();
    let body = response.json::<ErrorResponse>();
    assert_eq!(body.status, 400);
    assert_eq!(body.message, "Required parameter 'brandId' is missing");
}

#[rstest]
#[case::bad_date(
    params("invalid-date", "35455", "1"),
    "Invalid value 'invalid-date' for parameter 'applicationDate'. Expected type: date-time"
)]
#[case::bad_product(
    params("2020-06-14T10:00:00", "abc", "1"),
    "Invalid value 'abc' for parameter 'productId'. Expected type: integer"
)]
#[case::negative_product(
    params("2020-06-14T10:00:00", "-1", "1"),
    "Product ID must be a positive number, got -1"
)]
#[case::zero_brand(
    params("2020-06-14T10:00:00", "35455", "0"),
    "Brand ID must be a positive number, got 0"
)]
#[case::padded_product(
    params("2020-06-14T10:00:00", " 35455", "1"),
    "Invalid value ' 35455' for parameter 'productId'. Expected type: integer"
)]
#[case::padded_date(
    params("2020-06-14T10:00:00 ", "35455", "1"),
    "Invalid value '2020-06-14T10:00:00 ' for parameter 'applicationDate'. Expected type: date-time"
)]
#[test_log::test(tokio::test)]
async fn test_invalid_parameters(#[case] params: [(&str, &str); 3], #[case] message: &str) {
    let server = server().await;

    let response = get_prices(&server, &params).await;

    response.assert_status_bad_request();
    let body = response.json::<ErrorResponse>();
    assert_eq!(body.status, 400);
    assert_eq!(body.message, message);
    assert_eq!(body.path, "/api/prices");
}

#[test_log::test(tokio::test)]
async fn test_duplicated_parameter() {
    let server = server().await;

    let response = get_prices(
        &server,
        &[
            ("applicationDate", "2020-06-14T10:00:00"),
            ("productId", "35455"),
            ("productId", "35455"),
            ("brandId", "1"),
        ],
    )
    .await;

    response.assert_status_bad_request();
    let body = response.json::<ErrorResponse>();
    assert_eq!(body.status, 400);
    assert!(body.message.contains("productId"), "{}", body.message);
    assert_eq!(body.path, "/api/prices");
}

#[test_log::test(tokio::test)]
async fn test_storage_failure_is_hidden() {
    let server = offline_server();

    let response = get_prices(&server, &params("2020-06-14T10:00:00", "35455", "1")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<ErrorResponse>();
    assert_eq!(body.status, 500);
    assert_eq!(body.message, "An unexpected error occurred");
}

#[test_log::test(tokio::test)]
async fn test_health() {
    let server = server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[test_log::test(tokio::test)]
async fn test_openapi_document() {
    let (router, api) = router(TestApp::seeded().await);
    assert!(api.paths.as_ref().unwrap().paths.contains_key("/api/prices"));

    let server = TestServer::new(router).unwrap();
    let response = server.get("/docs/api.json").await;
    response.assert_status_ok();

    let document = response.json::<Value>();
    assert_eq!(document["info"]["title"], "Price Resolution API");
    let operation = &document["paths"]["/api/prices"]["get"];
    assert!(operation["responses"]["404"].is_object());
    let names: Vec<&str> = operation["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["applicationDate", "productId", "brandId"]);

    for parameter in operation["parameters"].as_array().unwrap() {
        assert_eq!(parameter["in"], "query");
        assert_eq!(parameter["required"], true, "{parameter}");
    }
    let schema = |index: usize| &operation["parameters"][index]["schema"];
    assert_eq!(schema(0)["type"], "string");
    assert_eq!(schema(0)["format"], "date-time");
    for index in [1, 2] {
        assert_eq!(schema(index)["type"], "integer");
        assert_eq!(schema(index)["format"], "int64");
        assert_eq!(schema(index)["minimum"], 1);
    }
}
