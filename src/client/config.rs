//! Client configuration options.

use secrecy::SecretString;
use std::time::Duration;

use crate::{Error, Platform, Result};

/// Production base URL of the tagging API.
pub const DEFAULT_BASE_URL: &str = "https://tagging.kuvut.com/api/1.0";

/// Environment variable holding the OAuth client id.
pub const ENV_CLIENT_ID: &str = "KUVUT_TAGGING_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "KUVUT_TAGGING_CLIENT_SECRET";
/// Environment variable holding the default platform.
pub const ENV_PLATFORM: &str = "KUVUT_TAGGING_PLATFORM";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "KUVUT_TAGGING_BASE_URL";

/// Configuration for the tagging client.
///
/// # Example
///
/// ```
/// use kuvut_tagging::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("client-id", "client-secret")
///     .with_platform("web")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.platform.as_ref().map(|p| p.as_str()), Some("web"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: SecretString,
    /// Platform used when a call does not name one
    pub platform: Option<Platform>,
    /// API base URL; authorization, token and endpoint URLs all hang off it
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Scopes requested on token exchange
    pub scopes: Vec<String>,
    /// Redirect URI advertised in the authorization URL
    pub redirect_uri: Option<String>,
    /// Whether to exchange credentials again when the cached token is about to expire
    pub auto_reacquire: bool,
    /// Buffer time (in seconds) before expiry to reacquire
    pub refresh_buffer_secs: i64,
}

impl ClientConfig {
    /// Create a configuration with default values for everything but the
    /// credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            platform: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("kuvut-tagging/{} (Rust)", env!("CARGO_PKG_VERSION")),
            scopes: vec!["basic".to_string()],
            redirect_uri: None,
            auto_reacquire: false,
            refresh_buffer_secs: 60,
        }
    }

    /// Build a configuration from `KUVUT_TAGGING_*` environment variables.
    ///
    /// The client id and secret are required; the platform and base URL
    /// are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        let mut config = Self::new(required(ENV_CLIENT_ID)?, required(ENV_CLIENT_SECRET)?);

        if let Some(platform) = lookup(ENV_PLATFORM).filter(|v| !v.is_empty()) {
            config = config.with_platform(platform);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }

    /// Set the default platform.
    pub fn with_platform(mut self, platform: impl Into<Platform>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Point the client at another deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the requested scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the redirect URI used by the authorization URL.
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Enable or disable reacquiring the token when it is about to expire.
    pub fn with_auto_reacquire(mut self, enabled: bool) -> Self {
        self.auto_reacquire = enabled;
        self
    }

    /// Set the buffer time before expiry to reacquire.
    pub fn with_refresh_buffer(mut self, secs: i64) -> Self {
        self.refresh_buffer_secs = secs;
        self
    }

    /// Base URL without a trailing slash.
    pub(crate) fn normalized_base_url(&self) -> Result<String> {
        let base = self.base_url.trim_end_matches('/');
        url::Url::parse(base)?;
        Ok(base.to_string())
    }
}
