use serde::Serialize;

use super::odata::{ODataId, Reference};
use super::{COMPOSITION_SERVICE, MANAGERS, RESOURCE_ZONES};
use crate::backend::{Enclosure, ServerHardware};

pub const MANAGER_COLLECTION_TYPE: &str = "ManagerCollection.ManagerCollection";

pub const ZONE_COLLECTION_TYPE: &str = "ZoneCollection.ZoneCollection";

/// Redfish resource collection
///
/// The member count is derived from the member list when the collection is
/// built and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    #[serde(rename = "@odata.type")]
    odata_type: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Members@odata.count")]
    members_count: usize,
    #[serde(rename = "Members")]
    members: Vec<Reference>,
    #[serde(rename = "@odata.context")]
    odata_context: String,
    #[serde(rename = "@odata.id")]
    odata_id: ODataId,
}

impl Collection {
    pub fn new(
        schema: &str,
        name: impl Into<String>,
        odata_id: ODataId,
        members: impl IntoIterator<Item = ODataId>,
    ) -> Self {
        let members: Vec<Reference> = members.into_iter().map(Reference::from).collect();
        Self {
            odata_type: format!("#{schema}"),
            name: name.into(),
            members_count: members.len(),
            members,
            odata_context: ODataId::metadata_context(schema),
            odata_id,
        }
    }

    /// One manager per enclosure, then one per server hardware unit
    pub fn managers(enclosures: &[Enclosure], server_hardware: &[ServerHardware]) -> Self {
        let id = ODataId::service_root().child(MANAGERS);
        let members = enclosures
            .iter()
            .map(|enclosure| enclosure.uuid.as_str())
            .chain(server_hardware.iter().map(|server| server.uuid.as_str()))
            .map(|uuid| id.child(uuid))
            .collect::<Vec<_>>();

        Self::new(MANAGER_COLLECTION_TYPE, "Manager Collection", id, members)
    }

    pub fn zones(zone_ids: &[String]) -> Self {
        let id = ODataId::service_root()
            .child(COMPOSITION_SERVICE)
            .child(RESOURCE_ZONES);
        let members = zone_ids.iter().map(|zone| id.child(zone)).collect::<Vec<_>>();

        Self::new(ZONE_COLLECTION_TYPE, "Resource Zone Collection", id, members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enclosure(uuid: &str) -> Enclosure {
        Enclosure {
            uri: format!("/rest/enclosures/{uuid}"),
            uuid: uuid.to_string(),
            name: String::new(),
        }
    }

    fn server(uuid: &str) -> ServerHardware {
        ServerHardware {
            uri: format!("/rest/server-hardware/{uuid}"),
            uuid: uuid.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn test_empty_manager_collection() {
        let collection = Collection::managers(&[], &[]);
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({
                "@odata.type": "#ManagerCollection.ManagerCollection",
                "Name": "Manager Collection",
                "Members@odata.count": 0,
                "Members": [],
                "@odata.context": "/redfish/v1/$metadata#ManagerCollection.ManagerCollection",
                "@odata.id": "/redfish/v1/Managers"
            })
        );
    }

    #[test]
    fn test_managers_list_enclosures_first() {
        let collection = Collection::managers(&[enclosure("E1")], &[server("S1"), server("S2")]);
        let value = serde_json::to_value(&collection).unwrap();

        assert_eq!(value["Members@odata.count"], 3);
        assert_eq!(
            value["Members"],
            json!([
                {"@odata.id": "/redfish/v1/Managers/E1"},
                {"@odata.id": "/redfish/v1/Managers/S1"},
                {"@odata.id": "/redfish/v1/Managers/S2"}
            ])
        );
    }

    #[test]
    fn test_zone_collection() {
        let collection = Collection::zones(&["spt-encl".to_string(), "spt".to_string()]);
        let value = serde_json::to_value(&collection).unwrap();

        assert_eq!(value["@odata.type"], "#ZoneCollection.ZoneCollection");
        assert_eq!(value["Name"], "Resource Zone Collection");
        assert_eq!(value["@odata.id"], "/redfish/v1/CompositionService/ResourceZones");
        assert_eq!(value["Members@odata.count"], 2);
        assert_eq!(
            value["Members"],
            json!([
                {"@odata.id": "/redfish/v1/CompositionService/ResourceZones/spt-encl"},
                {"@odata.id": "/redfish/v1/CompositionService/ResourceZones/spt"}
            ])
        );
    }
}
