//! Redfish documents served by the translation layer
//!
//! Everything here is plain data: documents are built per request from
//! typed backend snapshots, serialized once and dropped.

mod collection;
mod error;
mod odata;
mod service;

pub use collection::{Collection, MANAGER_COLLECTION_TYPE, ZONE_COLLECTION_TYPE};
pub use error::{ErrorDocument, MessageInfo};
pub use odata::{ODataId, Reference, SERVICE_ROOT};
pub use service::{CompositionService, RedfishVersions, ServiceRoot};

/// Path segment of the manager collection
pub const MANAGERS: &str = "Managers";

/// Path segment of the composition service
pub const COMPOSITION_SERVICE: &str = "CompositionService";

/// Path segment of the resource zone collection below the composition service
pub const RESOURCE_ZONES: &str = "ResourceZones";
