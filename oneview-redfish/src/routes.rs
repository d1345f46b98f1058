//! Route table
//!
//! Paths are matched exactly, trailing slash included. Anything else gets
//! the Redfish not-found document.

use axum::{
    http::{header::HeaderName, HeaderValue, Uri},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    error::Error,
    handlers::{
        composition_service, list_managers, list_resource_zones, redfish_versions, service_root,
    },
    health::{health, readiness},
    state::AppState,
};

/// Protocol version advertised on every response
pub const ODATA_VERSION: &str = "4.0";

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/redfish/", get(redfish_versions))
        .route("/redfish/v1/", get(service_root))
        .route("/redfish/v1/Managers/", get(list_managers))
        .route("/redfish/v1/CompositionService/", get(composition_service))
        .route(
            "/redfish/v1/CompositionService/ResourceZones/",
            get(list_resource_zones),
        )
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("odata-version"),
            HeaderValue::from_static(ODATA_VERSION),
        ))
        .with_state(state)
}

async fn not_found(uri: Uri) -> Error {
    Error::NotFound(uri.path().to_string())
}
