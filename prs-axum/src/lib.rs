#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the prs-axum crate.
//! [prs_core]: https://docs.rs/prs_core/latest/prs_core/index.html
//! [prs_axum]: https://docs.rs/prs_axum/latest/prs_axum/index.html
//! [prs_sqlite]: https://docs.rs/prs_sqlite/latest/prs_sqlite/index.html
#![doc = include_str!("../README.md")]

mod price_routes;

use aide::{
    axum::{ApiRouter, routing::get_with},
    openapi::OpenApi,
};
use axum::{Extension, Json, http::Method};
use prs_core::ports::Application;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors, trace::TraceLayer};

mod error;
pub use error::ErrorResponse;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the full API router for the given state.
///
/// Also returns the generated OpenAPI document, which is served under
/// `/docs/api.json` as well.
pub fn router<T: ApiApplication>(state: T) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();

    // Read-only and unauthenticated, so any origin may call it.
    let cors = cors::CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::GET])
        .allow_headers(cors::Any);

    let router = ApiRouter::new()
        .api_route("/health", get_with(health_check, |op| op.tag("ops")))
        .nest("/api", price_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone())) // Arc is very important here or you will face massive memory and performance issues
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication: Clone + Send + Sync + 'static + Application {}

// this is the blanket implementation
impl<T> ApiApplication for T where T: Clone + Send + Sync + 'static + Application {}
