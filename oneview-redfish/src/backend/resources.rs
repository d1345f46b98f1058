//! Typed snapshots of OneView records
//!
//! Only the identifying fields the translation needs are decoded. Everything
//! else in a OneView payload is ignored.

use serde::Deserialize;

/// Last path segment of a OneView URI (`/rest/enclosures/ABC` -> `ABC`)
pub fn resource_id(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerHardware {
    pub uri: String,
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enclosure {
    pub uri: String,
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProfileTemplate {
    pub uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enclosure_group_uri: Option<String>,
    #[serde(default)]
    pub local_storage: Option<LocalStorage>,
}

impl ServerProfileTemplate {
    pub fn id(&self) -> &str {
        resource_id(&self.uri)
    }

    /// A template with a storage controller has to be zoned against the
    /// drive enclosures its servers can reach.
    pub fn has_storage_controller(&self) -> bool {
        self.local_storage
            .as_ref()
            .is_some_and(|storage| !storage.controllers.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStorage {
    #[serde(default)]
    pub controllers: Vec<StorageController>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageController {
    #[serde(default)]
    pub device_slot: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalEnclosure {
    pub uri: String,
    #[serde(default)]
    pub name: String,
    /// Physical enclosures that make up the logical enclosure
    #[serde(default)]
    pub enclosure_uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveEnclosure {
    pub uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location_uri: Option<String>,
}

impl DriveEnclosure {
    /// Whether the record reports itself installed in `enclosure_uri`
    pub fn is_located_at(&self, enclosure_uri: &str) -> bool {
        self.location_uri.as_deref() == Some(enclosure_uri)
    }
}

/// Edge of the OneView index association graph
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexAssociation {
    #[serde(default)]
    pub name: Option<String>,
    pub parent_uri: String,
    pub child_uri: String,
}

/// Response of `/rest/version`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceVersion {
    pub current_version: u32,
    pub minimum_version: u32,
}
