//! reqwest implementation of [`OneViewApi`]
//!
//! Requests authenticate with a OneView login session. The session id is
//! acquired on first use, shared by every request of the process, and
//! dropped when the appliance rejects it so the next request logs in again.

use async_trait::async_trait;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use super::{decode, BackendError, BackendResult, OneViewApi, Page, ResourceKind};
use crate::config::OneViewConfig;

const LOGIN_PATH: &str = "/rest/login-sessions";

const AUTH_HEADER: &str = "Auth";

const API_VERSION_HEADER: &str = "X-API-Version";

const USER_AGENT: &str = concat!("oneview-redfish/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    user_name: &'a str,
    password: &'a str,
    auth_login_domain: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(rename = "sessionID")]
    session_id: String,
}

/// OneView appliance reached over HTTPS
pub struct HttpOneView {
    client: reqwest::Client,
    base: Url,
    username: String,
    password: String,
    auth_login_domain: String,
    api_version: u32,
    session: RwLock<Option<String>>,
}

impl HttpOneView {
    pub fn new(config: &OneViewConfig) -> BackendResult<Self> {
        let base = Url::parse(&config.url)?;

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(USER_AGENT);

        if config.accept_invalid_certs {
            tracing::warn!(url = %base, "TLS certificate verification disabled for OneView");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            base,
            username: config.username.clone(),
            password: config.password.clone(),
            auth_login_domain: config.auth_login_domain.clone(),
            api_version: config.api_version,
            session: RwLock::new(None),
        })
    }

    async fn session_token(&self) -> BackendResult<String> {
        if let Some(token) = self.session.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut session = self.session.write().await;
        // Another request may have logged in while we waited for the lock
        if let Some(token) = session.as_ref() {
            return Ok(token.clone());
        }

        let token = self.login().await?;
        *session = Some(token.clone());
        Ok(token)
    }

    async fn login(&self) -> BackendResult<String> {
        let url = self.base.join(LOGIN_PATH)?;
        tracing::debug!(url = %url, user = %self.username, "Opening OneView session");

        let response = self
            .client
            .post(url)
            .header(API_VERSION_HEADER, self.api_version)
            .json(&LoginRequest {
                user_name: &self.username,
                password: &self.password,
                auth_login_domain: &self.auth_login_domain,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Session(format!(
                "login as '{}' rejected with status {}",
                self.username, status
            )));
        }

        let login: LoginResponse = decode("login-session", response.json().await?)?;
        tracing::info!(user = %self.username, "OneView session established");
        Ok(login.session_id)
    }

    async fn fetch(&self, url: Url) -> BackendResult<Value> {
        let token = self.session_token().await?;
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(AUTH_HEADER, token)
            .header(API_VERSION_HEADER, self.api_version)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(BackendError::NotFound(url.path().to_string())),
            StatusCode::UNAUTHORIZED => {
                *self.session.write().await = None;
                Err(BackendError::Session(format!(
                    "session rejected by {}",
                    url.path()
                )))
            }
            status => Err(BackendError::Status {
                status,
                uri: url.path().to_string(),
            }),
        }
    }
}

#[async_trait]
impl OneViewApi for HttpOneView {
    async fn get_all(&self, kind: ResourceKind, filter: Option<&str>) -> BackendResult<Vec<Value>> {
        let mut url = self.base.join(kind.path())?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("start", "0").append_pair("count", "-1");
            if let Some(filter) = filter {
                query.append_pair("filter", filter);
            }
        }

        let page: Page<Value> = decode(&kind.to_string(), self.fetch(url).await?)?;
        Ok(page.members)
    }

    async fn get(&self, uri: &str) -> BackendResult<Value> {
        let url = self.base.join(uri)?;
        self.fetch(url).await
    }
}
