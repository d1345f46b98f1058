use axum::{extract::State, Json};

use crate::{
    composition::resolve_zone_ids,
    error::{Error, Result},
    redfish::Collection,
    state::AppState,
};

/// `GET /redfish/v1/CompositionService/ResourceZones/`
///
/// No templates is a valid, empty collection. Any backend failure is a 500,
/// a missing resource included: zones have no not-found outcome.
pub async fn list_resource_zones(State(state): State<AppState>) -> Result<Json<Collection>> {
    let zone_ids = resolve_zone_ids(state.oneview())
        .await
        .map_err(Error::Backend)?;
    Ok(Json(Collection::zones(&zone_ids)))
}
