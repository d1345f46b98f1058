//! Application state management

use std::sync::Arc;

use crate::{
    backend::{HttpOneView, OneViewClient},
    config::Config,
    error::{Error, Result},
};

/// Application state shared across handlers
///
/// Cloned per request; both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    oneview: OneViewClient,
}

impl AppState {
    /// Create a new AppState around an existing backend client
    pub fn new(config: Config, oneview: OneViewClient) -> Self {
        Self {
            config: Arc::new(config),
            oneview,
        }
    }

    /// Create a new builder for AppState
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the OneView client
    pub fn oneview(&self) -> &OneViewClient {
        &self.oneview
    }
}

/// Builder for AppState
///
/// Without an explicit client the builder connects to the appliance named in
/// the configuration over HTTPS.
#[derive(Default)]
pub struct AppStateBuilder {
    config: Option<Config>,
    oneview: Option<OneViewClient>,
}

impl AppStateBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this backend client instead of the HTTPS one
    pub fn oneview(mut self, oneview: OneViewClient) -> Self {
        self.oneview = Some(oneview);
        self
    }

    /// Build the AppState
    pub fn build(self) -> Result<AppState> {
        let config = self.config.unwrap_or_default();

        let oneview = match self.oneview {
            Some(oneview) => oneview,
            None => {
                let api = HttpOneView::new(&config.oneview).map_err(Error::from)?;
                tracing::info!(url = %config.oneview.url, api_version = config.oneview.api_version, "OneView client configured");
                OneViewClient::new(api)
            }
        };

        Ok(AppState::new(config, oneview))
    }
}
