use axum::{extract::State, Json};

use crate::{error::Result, redfish::Collection, state::AppState};

/// `GET /redfish/v1/Managers/`
///
/// Every enclosure and every server hardware unit has a management
/// processor; each becomes one member. Both lists are read concurrently and
/// the server hardware outcome is checked first.
pub async fn list_managers(State(state): State<AppState>) -> Result<Json<Collection>> {
    let oneview = state.oneview();
    let (enclosures, server_hardware) =
        tokio::join!(oneview.enclosures(), oneview.server_hardware());

    let server_hardware = server_hardware?;
    let enclosures = enclosures?;

    Ok(Json(Collection::managers(&enclosures, &server_hardware)))
}
