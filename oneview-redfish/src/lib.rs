//! # oneview-redfish
//!
//! Redfish front end for an HPE OneView appliance. Incoming Redfish GETs are
//! answered by reading OneView collections and reshaping them into Redfish
//! documents; nothing is cached or stored.
//!
//! ## Resources
//!
//! - `/redfish/v1/Managers/`: one manager per enclosure and per server hardware unit
//! - `/redfish/v1/CompositionService/ResourceZones/`: one zone per server profile
//!   template, split per drive-bearing enclosure when the template has a
//!   storage controller
//! - `/redfish/`, `/redfish/v1/`, `/redfish/v1/CompositionService/`: static entry points
//! - `/health`, `/ready`: liveness and readiness probes
//!
//! ## Example
//!
//! ```rust,no_run
//! use oneview_redfish::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     init_tracing(&config)?;
//!
//!     let state = AppState::builder().config(config.clone()).build()?;
//!
//!     Server::new(config).serve(router(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod composition;
pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod observability;
pub mod redfish;
pub mod routes;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::{BackendError, HttpOneView, OneViewApi, OneViewClient};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::health::{health, readiness};
    pub use crate::ids::{MakeTypedRequestId, RequestId};
    pub use crate::observability::init_tracing;
    pub use crate::redfish::{Collection, ErrorDocument};
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::{AppState, AppStateBuilder};
}
