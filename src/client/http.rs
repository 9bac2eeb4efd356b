//! HTTP client implementation for the tagging API.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{ActionsService, CategoriesService, TagsService, UsersService};
use crate::auth::{AccessToken, GrantType, TokenManager, TokenSettings};
use crate::{Error, Params, Result};

use super::config::ClientConfig;
use super::query::{build_url, resolve_platform};

/// The main client for interacting with the tagging API.
///
/// Endpoints are grouped into services reached through method calls. The
/// client owns the HTTP connection pool and the cached access token; cloning
/// it is cheap and clones share both.
///
/// # Example
///
/// ```no_run
/// use kuvut_tagging::{TaggingClient, ClientConfig};
/// use kuvut_tagging::models::{NewTag, TagAssignment};
///
/// # async fn example() -> kuvut_tagging::Result<()> {
/// let client = TaggingClient::new(
///     ClientConfig::new("client-id", "client-secret").with_platform("web"),
/// )?;
///
/// let created = client.tags().add(NewTag::new("vip", "VIP users")).await?;
/// client.tags().assign(TagAssignment::new("signup", "vip")).await?;
/// println!("{}", created);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TaggingClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) tokens: TokenManager,
    pub(crate) config: ClientConfig,
    pub(crate) base_url: String,
}

impl TaggingClient {
    /// Create a client from a configuration.
    ///
    /// No network traffic happens here; the token is obtained on the first
    /// authenticated call.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.client_id.is_empty() {
            return Err(Error::Config("client id must not be empty".to_string()));
        }

        let base_url = config.normalized_base_url()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let refresh_buffer = chrono::Duration::try_seconds(config.refresh_buffer_secs)
            .ok_or_else(|| {
                Error::Config(format!(
                    "refresh buffer of {} seconds is out of range",
                    config.refresh_buffer_secs
                ))
            })?;

        let tokens = TokenManager::new(
            http.clone(),
            TokenSettings {
                token_url: format!("{}/token/", base_url),
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
                auto_reacquire: config.auto_reacquire,
                refresh_buffer,
            },
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                tokens,
                config,
                base_url,
            }),
        })
    }

    /// Create a client against production with default settings.
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::new(ClientConfig::new(client_id, client_secret))
    }

    /// Create a client configured from `KUVUT_TAGGING_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the actions service.
    pub fn actions(&self) -> ActionsService {
        ActionsService::new(self.inner.clone())
    }

    /// Get the tags service.
    pub fn tags(&self) -> TagsService {
        TagsService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the access token, exchanging credentials on first use.
    ///
    /// See [`TokenManager::access_token`].
    pub async fn access_token(
        &self,
        grant: GrantType,
        params: Option<Params>,
    ) -> Result<Arc<AccessToken>> {
        self.inner
            .tokens
            .access_token(grant, &params.unwrap_or_default())
            .await
    }

    /// Drop the cached token; the next call exchanges credentials again.
    pub async fn clear_token(&self) {
        self.inner.tokens.clear().await
    }

    /// URL of the authorization endpoint for the authorization-code flow.
    ///
    /// Carries the client id, `response_type=code`, the configured scopes,
    /// `state` and, when configured, the redirect URI.
    pub fn authorization_url(&self, state: &str) -> Result<Url> {
        let config = &self.inner.config;
        let scope = config.scopes.join(" ");

        let mut pairs: Vec<(&str, &str)> = vec![
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("state", state),
        ];
        if let Some(redirect_uri) = config.redirect_uri.as_deref() {
            pairs.push(("redirect_uri", redirect_uri));
        }

        Ok(Url::parse_with_params(
            &format!("{}/authorize/", self.inner.base_url),
            pairs,
        )?)
    }

    /// Build the URL a call to `path` with `params` would hit.
    pub fn build_url(&self, path: &str, params: &Params) -> Result<String> {
        self.inner.request_url(path, params)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Resolve the platform and build the full URL for `path`.
    pub(crate) fn request_url(&self, path: &str, params: &Params) -> Result<String> {
        let default = self.config.platform.as_ref().map(|p| p.as_str());
        let platform = resolve_platform(params, default)?;
        Ok(build_url(&self.base_url, path, platform, params))
    }

    /// Validate, build and send one endpoint call.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        params: Params,
        required: &[&str],
    ) -> Result<Value> {
        params.require(required)?;
        let url = self.request_url(path, &params)?;
        self.authorized_request(method, &url).await
    }

    /// Send a bearer-authenticated request and parse the JSON answer.
    ///
    /// A non-empty top-level `error` field turns into [`Error::Service`];
    /// anything else is returned as received.
    pub(crate) async fn authorized_request(&self, method: Method, url: &str) -> Result<Value> {
        let token = self
            .tokens
            .access_token(GrantType::ClientCredentials, &Params::new())
            .await?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.secret().expose_secret()))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        auth.set_sensitive(true);

        tracing::debug!(%method, %url, "Sending tagging request");

        let response = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        let status = response.status();
        let body = parse_body(&response.text().await?)?;

        if let Some(err) = Error::from_service_body(&body) {
            tracing::debug!(%method, %url, status = status.as_u16(), "Service reported an error");
            return Err(err);
        }

        if !status.is_success() {
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                "Non-success status without an error payload"
            );
        }

        Ok(body)
    }
}

/// Parse a response body as JSON. An empty body is `null`.
pub(crate) fn parse_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

impl std::fmt::Debug for TaggingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggingClient")
            .field("base_url", &self.inner.base_url)
            .field("config", &self.inner.config)
            .finish()
    }
}
