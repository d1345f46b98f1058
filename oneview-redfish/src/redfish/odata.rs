//! OData identifiers used by the Redfish documents
//!
//! - [`ODataId`]: value of `@odata.id`, the canonical resource path (opaque string)
//! - [`Reference`]: a link object that carries only `@odata.id`
//!
//! These types are semantic-unaware; they do not validate content.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Redfish service root path
pub const SERVICE_ROOT: &str = "/redfish/v1";

/// Type for `@odata.id` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// Redfish service root id.
    #[must_use]
    pub fn service_root() -> Self {
        Self(SERVICE_ROOT.into())
    }

    /// Id of a child resource, `{self}/{segment}`
    #[must_use]
    pub fn child(&self, segment: impl Display) -> Self {
        Self(format!("{}/{}", self.0, segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `@odata.context` of a resource whose schema is `schema`
    #[must_use]
    pub fn metadata_context(schema: &str) -> String {
        format!("{SERVICE_ROOT}/$metadata#{schema}")
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ODataId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Navigation link that only carries `@odata.id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
}

impl From<ODataId> for Reference {
    fn from(odata_id: ODataId) -> Self {
        Self { odata_id }
    }
}
