//! Access token acquisition and caching.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::parse_body;
use crate::{Error, Params, Result};

/// Name of the parameter that would ask for a token refresh.
const REFRESH_TOKEN_PARAM: &str = "refresh_token";

/// OAuth2 grant types understood by the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrantType {
    /// Authenticate the application itself. The only grant this client
    /// uses for API calls.
    #[default]
    ClientCredentials,
    /// Exchange an authorization code obtained through
    /// [`authorization_url`](crate::TaggingClient::authorization_url).
    /// The `code` (and `redirect_uri`, if any) travel in the params.
    AuthorizationCode,
    /// Always rejected with [`Error::UnsupportedOperation`].
    RefreshToken,
}

impl GrantType {
    /// Wire name of the grant.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::ClientCredentials => "client_credentials",
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::RefreshToken => "refresh_token",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bearer token issued by the tagging service.
#[derive(Clone)]
pub struct AccessToken {
    secret: SecretString,
    token_type: String,
    expires_at: Option<DateTime<Utc>>,
    scope: Option<String>,
}

impl AccessToken {
    /// The raw token. Keep it out of logs.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Token type reported by the service, usually `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// When the token stops being valid, if the service said so.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Granted scope, if reported.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Check if the token has expired. Tokens without an expiry never do.
    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::zero())
    }

    /// Check if the token will expire within the given buffer period.
    ///
    /// A buffer reaching past the representable range counts as covering the
    /// expiry when positive, and as not reaching it when negative.
    pub fn expires_within(&self, buffer: Duration) -> bool {
        self.expires_at
            .map(|expires_at| match Utc::now().checked_add_signed(buffer) {
                Some(horizon) => horizon >= expires_at,
                None => buffer > Duration::zero(),
            })
            .unwrap_or(false)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Settings the token manager needs from the client configuration.
pub(crate) struct TokenSettings {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub auto_reacquire: bool,
    pub refresh_buffer: Duration,
}

/// Obtains one access token per client and hands it out on every call.
///
/// The check-and-cache step runs under an async mutex, so concurrent callers
/// sharing a client wait for the first exchange instead of starting their own.
pub struct TokenManager {
    http: reqwest::Client,
    settings: TokenSettings,
    cached: Mutex<Option<Arc<AccessToken>>>,
}

impl TokenManager {
    pub(crate) fn new(http: reqwest::Client, settings: TokenSettings) -> Self {
        Self {
            http,
            settings,
            cached: Mutex::new(None),
        }
    }

    /// Get the access token, exchanging credentials on first use.
    ///
    /// A cached token is returned as-is. When the client was configured with
    /// `auto_reacquire`, a token about to expire is replaced through a new
    /// exchange of the same grant.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedOperation`] if `grant` is
    ///   [`GrantType::RefreshToken`] or `params` carries a `refresh_token`,
    ///   whether or not a token is cached
    /// - [`Error::Service`] if the token endpoint answers with an `error`
    /// - [`Error::Authentication`] if the endpoint fails without one
    pub async fn access_token(
        &self,
        grant: GrantType,
        params: &Params,
    ) -> Result<Arc<AccessToken>> {
        if grant == GrantType::RefreshToken || params.get(REFRESH_TOKEN_PARAM).is_some() {
            return Err(Error::UnsupportedOperation(
                "the tagging service does not support token refreshing".to_string(),
            ));
        }

        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            let stale = self.settings.auto_reacquire
                && token.expires_within(self.settings.refresh_buffer);
            if !stale {
                return Ok(Arc::clone(token));
            }
            tracing::debug!(expires_at = ?token.expires_at, "Cached token about to expire; reacquiring");
        }

        let token = Arc::new(self.exchange(grant, params).await?);
        *cached = Some(Arc::clone(&token));
        Ok(token)
    }

    /// The cached token, without triggering an exchange.
    pub async fn cached(&self) -> Option<Arc<AccessToken>> {
        self.cached.lock().await.clone()
    }

    /// Drop the cached token so the next call performs a new exchange.
    pub async fn clear(&self) {
        self.cached.lock().await.take();
    }

    async fn exchange(&self, grant: GrantType, params: &Params) -> Result<AccessToken> {
        // Scopes belong to the authorization URL only.
        let mut form: Vec<(&str, &str)> = vec![
            ("grant_type", grant.as_str()),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.expose_secret()),
        ];
        form.extend(params.iter());

        tracing::debug!(url = %self.settings.token_url, grant = %grant, "Exchanging client credentials");

        let response = self
            .http
            .post(&self.settings.token_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = match parse_body(&text) {
            Ok(body) => body,
            Err(err) if status.is_success() => return Err(err),
            Err(_) => Value::String(text),
        };

        if let Some(err) = Error::from_service_body(&body) {
            return Err(err);
        }

        if !status.is_success() {
            return Err(Error::Authentication(format!(
                "Token exchange failed ({}): {}",
                status.as_u16(),
                body
            )));
        }

        let response: TokenResponse = serde_json::from_value(body)?;
        if response.access_token.is_empty() {
            return Err(Error::Authentication(
                "Token endpoint returned an empty access token".to_string(),
            ));
        }

        Ok(AccessToken {
            secret: SecretString::from(response.access_token),
            token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at: response.expires_in.and_then(expiry_from_now),
            scope: response.scope,
        })
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.settings.token_url)
            .field("client_id", &self.settings.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Absolute expiry for a lifetime in seconds. Lifetimes past the
/// representable range leave the token without an expiry.
fn expiry_from_now(secs: i64) -> Option<DateTime<Utc>> {
    let expires_at =
        Duration::try_seconds(secs).and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
    if expires_at.is_none() {
        tracing::warn!(expires_in = secs, "Token lifetime out of range; treating as non-expiring");
    }
    expires_at
}

/// Accepts `expires_in` as a JSON number or a numeric string.
fn deserialize_seconds<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(i64),
        Text(String),
    }

    match Option::<Seconds>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Seconds::Number(secs)) => Ok(Some(secs)),
        Some(Seconds::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid expires_in: {:?}", text))),
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_seconds")]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<String>,
}
