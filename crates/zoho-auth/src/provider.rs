//! Token providers for the Zoho client.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use zoho_client::TokenProvider;

use crate::credentials::ZohoCredentials;
use crate::error::Result;
use crate::oauth::{OAuthClient, TokenResponse};

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN_SECS: i64 = 300;

/// Lifetime assumed when the token endpoint omits `expires_in`.
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Provider that always hands out the same token.
///
/// Refreshing is a no-op, so a rejected token surfaces as a 401 API error.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl StaticTokenProvider {
    /// Create a provider for a fixed access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    async fn get_valid_access_token(&self) -> zoho_client::Result<String> {
        Ok(self.token.clone())
    }

    async fn refresh_access_token(&self) -> zoho_client::Result<()> {
        warn!("Static access token cannot be refreshed");
        Ok(())
    }
}

struct CachedToken {
    access_token: String,
    /// `None` when the lifetime is unknown: a seeded token, or an
    /// `expires_in` too large to represent.
    expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        let lifetime = response.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        let expires_at = Duration::try_seconds(lifetime).and_then(|d| now.checked_add_signed(d));
        Self {
            access_token: response.access_token,
            expires_at,
        }
    }

    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now + Duration::seconds(EXPIRY_MARGIN_SECS) < expires_at,
            None => true,
        }
    }
}

/// Provider that mints access tokens from a Zoho refresh token.
///
/// The current token is kept in memory with its expiry and replaced when it
/// is within five minutes of expiring or when the client reports a 401.
pub struct OAuthTokenProvider {
    credentials: ZohoCredentials,
    oauth: OAuthClient,
    cached: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for OAuthTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTokenProvider")
            .field("credentials", &self.credentials)
            .field("oauth", &self.oauth)
            .finish_non_exhaustive()
    }
}

impl OAuthTokenProvider {
    /// Create a provider talking to the accounts server of the credentials' region.
    pub fn new(credentials: ZohoCredentials) -> Self {
        let oauth = OAuthClient::new(credentials.region().accounts_url());
        Self::with_oauth_client(credentials, oauth)
    }

    /// Create a provider with an explicit OAuth client.
    pub fn with_oauth_client(credentials: ZohoCredentials, oauth: OAuthClient) -> Self {
        let cached = credentials.access_token().map(|token| CachedToken {
            access_token: token.to_string(),
            expires_at: None,
        });

        Self {
            credentials,
            oauth,
            cached: Mutex::new(cached),
        }
    }

    /// Create a provider from `ZOHO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ZohoCredentials::from_env()?))
    }

    /// The credentials this provider refreshes with.
    pub fn credentials(&self) -> &ZohoCredentials {
        &self.credentials
    }

    async fn fetch(&self) -> Result<CachedToken> {
        let response = self.oauth.refresh_token(&self.credentials).await?;
        let token = CachedToken::from_response(response, Utc::now());
        info!(expires_at = ?token.expires_at, "Obtained Zoho access token");
        Ok(token)
    }
}

impl TokenProvider for OAuthTokenProvider {
    async fn get_valid_access_token(&self) -> zoho_client::Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(token.access_token.clone());
        }

        debug!("Access token missing or near expiry, refreshing");
        let token = self.fetch().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    async fn refresh_access_token(&self) -> zoho_client::Result<()> {
        let mut cached = self.cached.lock().await;
        *cached = Some(self.fetch().await?);
        Ok(())
    }
}
