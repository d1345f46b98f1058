//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `ONEVIEW_REDFISH_`, nested keys separated by `__`)
//! 2. An explicit file, or the current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/oneview-redfish/config.toml
//! 4. System directory: /etc/oneview-redfish/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Prefix of the environment variables that override file configuration
pub const ENV_PREFIX: &str = "ONEVIEW_REDFISH_";

const APP_DIR: &str = "oneview-redfish";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const CORS_MODES: &[&str] = &["permissive", "restrictive", "disabled"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// OneView appliance the Redfish API is translated from
    pub oneview: OneViewConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// OneView appliance connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct OneViewConfig {
    /// Base URL of the appliance, e.g. `https://oneview.example.com`
    pub url: String,

    /// Login user
    #[serde(default)]
    pub username: String,

    /// Login password
    #[serde(default)]
    pub password: String,

    /// Directory the user authenticates against
    #[serde(default = "default_auth_login_domain")]
    pub auth_login_domain: String,

    /// Value sent in the `X-API-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: u32,

    /// Whole-request timeout in seconds
    #[serde(default = "default_oneview_timeout")]
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Skip TLS certificate verification (self-signed appliances)
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl OneViewConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Copy of the settings that is safe to print
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.password.is_empty() {
            copy.password = "[REDACTED]".to_string();
        }
        copy
    }
}

impl fmt::Debug for OneViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneViewConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("auth_login_domain", &self.auth_login_domain)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request tracking configuration (request IDs, header masking)
    #[serde(default)]
    pub request_tracking: RequestTrackingConfig,

    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS configuration
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            request_tracking: RequestTrackingConfig::default(),
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

/// Request tracking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestTrackingConfig {
    /// Enable request ID generation
    #[serde(default = "default_true")]
    pub request_id_enabled: bool,

    /// Enable sensitive header masking in logs
    #[serde(default = "default_true")]
    pub mask_sensitive_headers: bool,
}

impl Default for RequestTrackingConfig {
    fn default() -> Self {
        Self {
            request_id_enabled: true,
            mask_sensitive_headers: true,
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_auth_login_domain() -> String {
    "Local".to_string()
}

fn default_api_version() -> u32 {
    600
}

fn default_oneview_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_body_limit_mb() -> usize {
    1
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Searches for config files in this order (first found wins):
    /// 1. Current working directory: ./config.toml
    /// 2. XDG config directory: ~/.config/oneview-redfish/config.toml
    /// 3. System directory: /etc/oneview-redfish/config.toml
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so higher priority files override
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the search path. Environment variables still override the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Internal(format!(
                "configuration file {} does not exist",
                path.display()
            )));
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Config file locations, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_DIR);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc").join(APP_DIR).join("config.toml"));

        paths
    }

    /// Check values that deserialize fine but cannot work at runtime
    pub fn validate(&self) -> Result<()> {
        if self.service.name.is_empty() {
            return Err(invalid("service.name cannot be empty"));
        }

        if self.service.port == 0 {
            return Err(invalid("service.port must be greater than 0"));
        }

        if !LOG_LEVELS.contains(&self.service.log_level.as_str()) {
            return Err(invalid(format!(
                "service.log_level must be one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }

        if let Err(e) = url::Url::parse(&self.oneview.url) {
            return Err(invalid(format!(
                "oneview.url '{}' is not a valid URL: {}",
                self.oneview.url, e
            )));
        }

        if self.oneview.username.is_empty() {
            return Err(invalid("oneview.username cannot be empty"));
        }

        if !CORS_MODES.contains(&self.middleware.cors_mode.as_str()) {
            return Err(invalid(format!(
                "middleware.cors_mode must be one of: {}",
                CORS_MODES.join(", ")
            )));
        }

        Ok(())
    }

    /// Request timeout applied by the server
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }

    /// Copy of the configuration that is safe to print
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.oneview = self.oneview.redacted();
        copy
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Config(Box::new(figment::Error::from(message.into())))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "oneview-redfish".to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            oneview: OneViewConfig {
                url: "https://localhost".to_string(),
                username: String::new(),
                password: String::new(),
                auth_login_domain: default_auth_login_domain(),
                api_version: default_api_version(),
                timeout_secs: default_oneview_timeout(),
                connect_timeout_secs: default_connect_timeout(),
                accept_invalid_certs: false,
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}
