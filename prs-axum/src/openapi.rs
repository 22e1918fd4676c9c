//! OpenAPI documentation generation and serving.
//!
//! This module provides endpoints for serving the auto-generated OpenAPI
//! specification and an interactive API documentation interface using RapiDoc.

use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{OpenApi, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

/// Serve the RapiDoc interactive API documentation interface.
///
/// Returns an HTML page that renders the OpenAPI specification using RapiDoc,
/// providing an interactive way to explore and test the API endpoints.
async fn serve_rapidoc() -> impl IntoApiResponse {
    let html = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        show-method-in-nav-bar="as-colored-text"
        use-path-in-nav-bar="true"
        allow-authentication="false"
    ></rapi-doc>
  </body>
</html>"#;
    Html(html).into_response()
}

/// Creates a router for documentation endpoints.
pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(serve_rapidoc))
        .route("/api.json", get(serve_docs))
}

/// Serve the raw OpenAPI specification.
async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Configure the OpenAPI documentation metadata.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Price Resolution API")
        .summary("Point-in-time price lookups for a product catalog.")
        .description("Resolves the single price that applies to a product of a brand at a given instant, choosing by priority among overlapping price lists.")
        .version("0.1")
        .tag(Tag {
            name: "prices".into(),
            description: Some("Price queries".into()),
            ..Default::default()
        })
        .tag(Tag {
            name: "ops".into(),
            description: Some("Operational endpoints".into()),
            ..Default::default()
        })
}
