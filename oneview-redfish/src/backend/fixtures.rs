//! Canned OneView payloads shared by the tests

use serde_json::{json, Value};

use super::mock::MockOneView;
use super::resources::resource_id;
use super::{association_path, location_filter, ResourceKind, LOGICAL_ENCLOSURES_CATEGORY};

pub const ENCLOSURE_1: &str = "/rest/enclosures/0000000000A66101";
pub const ENCLOSURE_2: &str = "/rest/enclosures/0000000000A66102";

pub const ENCLOSURE_GROUP: &str = "/rest/enclosure-groups/ad5e9e88-b858-4935-ba58-017d60a17c89";
pub const LOGICAL_ENCLOSURE: &str = "/rest/logical-enclosures/c8ed5c0a-00e9-4b24-9e8b-fe3d59b2c9b8";

pub const STORAGE_TEMPLATE_ID: &str = "1f0ca9ef-7f81-45e3-9d64-341b46cf87e0";
pub const COMPUTE_TEMPLATE_ID: &str = "61c3a463-1355-4c68-a4e3-4f08c322af1f";

pub const SERVER_1_UUID: &str = "30303437-3034-4D32-3230-313130304752";
pub const SERVER_2_UUID: &str = "30303437-3034-4D32-3230-313131304752";

pub fn enclosures() -> Value {
    json!([
        {
            "type": "EnclosureV7",
            "uri": ENCLOSURE_1,
            "uuid": "0000000000A66101",
            "name": "0000A66101",
            "enclosureType": "SY12000",
            "state": "Configured"
        },
        {
            "type": "EnclosureV7",
            "uri": ENCLOSURE_2,
            "uuid": "0000000000A66102",
            "name": "0000A66102",
            "enclosureType": "SY12000",
            "state": "Configured"
        }
    ])
}

pub fn server_hardware() -> Value {
    json!([
        {
            "type": "server-hardware-8",
            "uri": format!("/rest/server-hardware/{SERVER_1_UUID}"),
            "uuid": SERVER_1_UUID,
            "name": "0000A66101, bay 3",
            "powerState": "Off"
        },
        {
            "type": "server-hardware-8",
            "uri": format!("/rest/server-hardware/{SERVER_2_UUID}"),
            "uuid": SERVER_2_UUID,
            "name": "0000A66101, bay 4",
            "powerState": "On"
        }
    ])
}

pub fn server_profile_templates() -> Value {
    json!([
        {
            "type": "ServerProfileTemplateV5",
            "uri": format!("/rest/server-profile-templates/{STORAGE_TEMPLATE_ID}"),
            "name": "Template with storage",
            "enclosureGroupUri": ENCLOSURE_GROUP,
            "localStorage": {
                "sasLogicalJBODs": [],
                "controllers": [
                    {"deviceSlot": "Mezz 1", "mode": "Mixed", "initialize": false}
                ]
            }
        },
        {
            "type": "ServerProfileTemplateV5",
            "uri": format!("/rest/server-profile-templates/{COMPUTE_TEMPLATE_ID}"),
            "name": "Compute only",
            "enclosureGroupUri": ENCLOSURE_GROUP,
            "localStorage": {"sasLogicalJBODs": [], "controllers": []}
        }
    ])
}

/// Index associations of [`ENCLOSURE_GROUP`]; the first edge belongs to another group
pub fn logical_enclosure_associations() -> Value {
    json!({
        "category": "index-associations",
        "count": 2,
        "members": [
            {
                "name": "ENCLOSURE_GROUP_TO_LOGICAL_ENCLOSURE",
                "parentUri": "/rest/enclosure-groups/another-group",
                "childUri": "/rest/logical-enclosures/another-logical-enclosure"
            },
            {
                "name": "ENCLOSURE_GROUP_TO_LOGICAL_ENCLOSURE",
                "parentUri": ENCLOSURE_GROUP,
                "childUri": LOGICAL_ENCLOSURE
            }
        ]
    })
}

pub fn logical_enclosure() -> Value {
    json!({
        "type": "LogicalEnclosureV4",
        "uri": LOGICAL_ENCLOSURE,
        "name": "LE-Synergy",
        "enclosureGroupUri": ENCLOSURE_GROUP,
        "enclosureUris": [ENCLOSURE_1, ENCLOSURE_2]
    })
}

/// Drive enclosures of [`ENCLOSURE_1`]; [`ENCLOSURE_2`] has none
pub fn drive_enclosures() -> Value {
    drive_enclosures_at(ENCLOSURE_1)
}

/// A single drive enclosure in bay 1 of `enclosure_uri`
pub fn drive_enclosures_at(enclosure_uri: &str) -> Value {
    json!([
        {
            "type": "DriveEnclosureV2",
            "uri": format!("/rest/drive-enclosures/SN{}", resource_id(enclosure_uri)),
            "name": "bay 1",
            "locationUri": enclosure_uri,
            "driveBayCount": 40
        }
    ])
}

/// Backend holding one storage template, one compute template and the
/// topology behind the storage template's enclosure group
pub fn zoned_backend() -> MockOneView {
    MockOneView::new()
        .with_list(ResourceKind::ServerProfileTemplates, server_profile_templates())
        .with_list(ResourceKind::Enclosures, enclosures())
        .with_list(ResourceKind::DriveEnclosures, json!([]))
        .with_filtered_list(
            ResourceKind::DriveEnclosures,
            location_filter(ENCLOSURE_1),
            drive_enclosures(),
        )
        .with_resource(
            association_path(ENCLOSURE_GROUP, LOGICAL_ENCLOSURES_CATEGORY),
            logical_enclosure_associations(),
        )
        .with_resource(LOGICAL_ENCLOSURE, logical_enclosure())
}

/// Zone ids `zoned_backend` resolves to, in collection order
pub fn expected_zone_ids() -> Vec<String> {
    vec![
        format!("{STORAGE_TEMPLATE_ID}-0000000000A66101"),
        COMPUTE_TEMPLATE_ID.to_string(),
    ]
}
