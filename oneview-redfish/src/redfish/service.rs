//! Static entry-point documents

use serde::Serialize;

use super::odata::{ODataId, Reference};
use super::{COMPOSITION_SERVICE, MANAGERS, RESOURCE_ZONES};

const REDFISH_VERSION: &str = "1.6.0";

/// `GET /redfish/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedfishVersions {
    v1: String,
}

impl Default for RedfishVersions {
    fn default() -> Self {
        Self {
            v1: format!("{}/", ODataId::service_root()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceRoot {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    id: &'static str,
    name: &'static str,
    redfish_version: &'static str,
    managers: Reference,
    composition_service: Reference,
    #[serde(rename = "@odata.context")]
    odata_context: String,
    #[serde(rename = "@odata.id")]
    odata_id: ODataId,
}

impl Default for ServiceRoot {
    fn default() -> Self {
        let root = ODataId::service_root();
        Self {
            odata_type: "#ServiceRoot.v1_2_0.ServiceRoot",
            id: "RootService",
            name: "Root Service",
            redfish_version: REDFISH_VERSION,
            managers: root.child(MANAGERS).into(),
            composition_service: root.child(COMPOSITION_SERVICE).into(),
            odata_context: ODataId::metadata_context("ServiceRoot.ServiceRoot"),
            odata_id: root,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompositionService {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    id: &'static str,
    name: &'static str,
    status: Status,
    service_enabled: bool,
    resource_zones: Reference,
    #[serde(rename = "@odata.context")]
    odata_context: String,
    #[serde(rename = "@odata.id")]
    odata_id: ODataId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Status {
    state: &'static str,
    health: &'static str,
}

impl Default for CompositionService {
    fn default() -> Self {
        let id = ODataId::service_root().child(COMPOSITION_SERVICE);
        Self {
            odata_type: "#CompositionService.v1_0_0.CompositionService",
            id: "CompositionService",
            name: "Composition Service",
            status: Status {
                state: "Enabled",
                health: "OK",
            },
            service_enabled: true,
            resource_zones: id.child(RESOURCE_ZONES).into(),
            odata_context: ODataId::metadata_context("CompositionService.CompositionService"),
            odata_id: id,
        }
    }
}
