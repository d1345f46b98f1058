//! Static entry points; none of them touch the backend

use axum::Json;

use crate::redfish::{CompositionService, RedfishVersions, ServiceRoot};

/// `GET /redfish/`
pub async fn redfish_versions() -> Json<RedfishVersions> {
    Json(RedfishVersions::default())
}

/// `GET /redfish/v1/`
pub async fn service_root() -> Json<ServiceRoot> {
    Json(ServiceRoot::default())
}

/// `GET /redfish/v1/CompositionService/`
pub async fn composition_service() -> Json<CompositionService> {
    Json(CompositionService::default())
}
