//! Redfish request handlers
//!
//! Each handler reads what it needs from the OneView client in
//! [`AppState`](crate::state::AppState), builds one document and returns it
//! as JSON. Failures are returned as [`Error`](crate::error::Error), which
//! renders the canonical Redfish error body:
//!
//! | Outcome | Status |
//! |---|---|
//! | document built | 200 |
//! | backend reported a resource as absent (Managers) | 404 |
//! | any other backend failure | 500 |
//!
//! The zone collection has no 404 outcome; every backend failure there is a 500.

pub mod managers;
pub mod service;
pub mod zones;

pub use managers::list_managers;
pub use service::{composition_service, redfish_versions, service_root};
pub use zones::list_resource_zones;
