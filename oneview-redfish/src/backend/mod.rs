//! OneView backend access
//!
//! [`OneViewApi`] is the transport-agnostic capability the handlers depend
//! on: list every record of a kind, fetch one path, and follow the index
//! association graph. Every call returns `Ok`, `Err(BackendError::NotFound)`
//! or another [`BackendError`].
//!
//! [`OneViewClient`] wraps a shared implementation and decodes raw JSON into
//! the typed snapshots in [`resources`]. It is cheap to clone and is handed
//! to handlers through the application state, never read from a global.
//!
//! [`rest::HttpOneView`] is the reqwest implementation used in production.

pub mod error;
pub mod rest;
pub mod resources;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub use error::{BackendError, BackendResult};
pub use rest::HttpOneView;
pub use resources::{
    ApplianceVersion, DriveEnclosure, Enclosure, IndexAssociation, LogicalEnclosure,
    ServerHardware, ServerProfileTemplate,
};

/// Index association category linking enclosure groups to logical enclosures
pub const LOGICAL_ENCLOSURES_CATEGORY: &str = "logical-enclosures";

const ASSOCIATIONS_PATH: &str = "/rest/index/associations/resources";

const VERSION_PATH: &str = "/rest/version";

/// OneView collections the translation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ServerHardware,
    Enclosures,
    ServerProfileTemplates,
    LogicalEnclosures,
    DriveEnclosures,
}

impl ResourceKind {
    /// Collection path on the appliance
    pub fn path(&self) -> &'static str {
        match self {
            Self::ServerHardware => "/rest/server-hardware",
            Self::Enclosures => "/rest/enclosures",
            Self::ServerProfileTemplates => "/rest/server-profile-templates",
            Self::LogicalEnclosures => "/rest/logical-enclosures",
            Self::DriveEnclosures => "/rest/drive-enclosures",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ServerHardware => "server-hardware",
            Self::Enclosures => "enclosures",
            Self::ServerProfileTemplates => "server-profile-templates",
            Self::LogicalEnclosures => "logical-enclosures",
            Self::DriveEnclosures => "drive-enclosures",
        };
        f.write_str(name)
    }
}

/// Path of an index association query
pub fn association_path(parent_uri: &str, category: &str) -> String {
    format!("{ASSOCIATIONS_PATH}?parenturi={parent_uri}&category={category}")
}

/// Filter expression selecting records physically located at `location_uri`
pub fn location_filter(location_uri: &str) -> String {
    format!("locationUri='{location_uri}'")
}

/// Read-only access to a OneView appliance
#[async_trait]
pub trait OneViewApi: Send + Sync {
    /// Every record of `kind`, optionally narrowed by a OneView filter expression
    async fn get_all(&self, kind: ResourceKind, filter: Option<&str>) -> BackendResult<Vec<Value>>;

    /// Raw document at `uri`; the URI may carry a query string
    async fn get(&self, uri: &str) -> BackendResult<Value>;

    /// Index associations of `parent_uri` in `category`
    async fn associations(&self, parent_uri: &str, category: &str) -> BackendResult<Value> {
        self.get(&association_path(parent_uri, category)).await
    }
}

/// Typed, shareable handle on a [`OneViewApi`]
#[derive(Clone)]
pub struct OneViewClient {
    api: Arc<dyn OneViewApi>,
}

impl OneViewClient {
    pub fn new(api: impl OneViewApi + 'static) -> Self {
        Self { api: Arc::new(api) }
    }

    pub fn from_arc(api: Arc<dyn OneViewApi>) -> Self {
        Self { api }
    }

    pub async fn enclosures(&self) -> BackendResult<Vec<Enclosure>> {
        self.list(ResourceKind::Enclosures, None).await
    }

    pub async fn server_hardware(&self) -> BackendResult<Vec<ServerHardware>> {
        self.list(ResourceKind::ServerHardware, None).await
    }

    pub async fn server_profile_templates(&self) -> BackendResult<Vec<ServerProfileTemplate>> {
        self.list(ResourceKind::ServerProfileTemplates, None).await
    }

    /// Drive enclosures installed in the enclosure at `location_uri`
    pub async fn drive_enclosures_at(&self, location_uri: &str) -> BackendResult<Vec<DriveEnclosure>> {
        let filter = location_filter(location_uri);
        self.list(ResourceKind::DriveEnclosures, Some(&filter)).await
    }

    pub async fn logical_enclosure(&self, uri: &str) -> BackendResult<LogicalEnclosure> {
        let value = self.api.get(uri).await?;
        decode(&ResourceKind::LogicalEnclosures.to_string(), value)
    }

    pub async fn associations(
        &self,
        parent_uri: &str,
        category: &str,
    ) -> BackendResult<Vec<IndexAssociation>> {
        let value = self.api.associations(parent_uri, category).await?;
        let page: Page<IndexAssociation> = decode("index-associations", value)?;
        Ok(page.members)
    }

    /// Appliance API version; used as a reachability probe
    pub async fn version(&self) -> BackendResult<ApplianceVersion> {
        let value = self.api.get(VERSION_PATH).await?;
        decode("version", value)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        filter: Option<&str>,
    ) -> BackendResult<Vec<T>> {
        let records = self.api.get_all(kind, filter).await?;
        tracing::debug!(kind = %kind, count = records.len(), "Fetched OneView records");
        let resource = kind.to_string();
        records
            .into_iter()
            .map(|record| decode(&resource, record))
            .collect()
    }
}

/// OneView collection envelope
#[derive(Debug, serde::Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub members: Vec<T>,
}

pub(crate) fn decode<T: DeserializeOwned>(resource: &str, value: Value) -> BackendResult<T> {
    serde_path_to_error::deserialize(value).map_err(|e| BackendError::Decode {
        resource: resource.to_string(),
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::mock::{Call, MockOneView};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_shapes() {
        assert_eq!(
            association_path("/rest/enclosure-groups/eg1", LOGICAL_ENCLOSURES_CATEGORY),
            "/rest/index/associations/resources?parenturi=/rest/enclosure-groups/eg1&category=logical-enclosures"
        );
        assert_eq!(
            location_filter("/rest/enclosures/0000000000A66101"),
            "locationUri='/rest/enclosures/0000000000A66101'"
        );
    }

    #[tokio::test]
    async fn test_drive_enclosure_filter_is_forwarded() {
        let mock = Arc::new(MockOneView::new().with_list(ResourceKind::DriveEnclosures, json!([])));
        let client = OneViewClient::from_arc(mock.clone());

        let drives = client.drive_enclosures_at("/rest/enclosures/E1").await.unwrap();
        assert!(drives.is_empty());
        assert_eq!(
            mock.calls(),
            vec![Call::GetAll {
                kind: ResourceKind::DriveEnclosures,
                filter: Some("locationUri='/rest/enclosures/E1'".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_decode_error_reports_path() {
        let mock = MockOneView::new().with_list(
            ResourceKind::Enclosures,
            json!([{"uri": "/rest/enclosures/E1", "uuid": "E1"}, {"uri": "/rest/enclosures/E2"}]),
        );
        let client = OneViewClient::new(mock);

        match client.enclosures().await {
            Err(BackendError::Decode { resource, message, .. }) => {
                assert_eq!(resource, "enclosures");
                assert!(message.contains("uuid"));
            }
            other => panic!("expected decode error, got {:?}", other.map(|v| v.len())),
        }
    }

    #[tokio::test]
    async fn test_associations_without_members() {
        let mock = MockOneView::new().with_resource(
            association_path("/rest/enclosure-groups/eg1", LOGICAL_ENCLOSURES_CATEGORY),
            json!({"category": "index-associations"}),
        );
        let client = OneViewClient::new(mock);

        let associations = client
            .associations("/rest/enclosure-groups/eg1", LOGICAL_ENCLOSURES_CATEGORY)
            .await
            .unwrap();
        assert!(associations.is_empty());
    }
}
