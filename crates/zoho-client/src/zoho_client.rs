//! High-level Zoho client with typed HTTP methods.
//!
//! This module provides `ZohoClient`, which combines a base URL and a token
//! provider with an HTTP client and provides typed JSON methods for API
//! interactions.
//!
//! ## Security
//!
//! - Access tokens never appear in Debug output
//! - Query parameters are recorded in spans by count only

use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use crate::auth::TokenProvider;
use crate::client::ZohoHttpClient;
use crate::config::{ClientConfig, PaginationConfig};
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// High-level Zoho API client.
///
/// Designed to be used by the product-specific crates (zoho-people, ...).
/// Every request asks the provider for a token; a 401 triggers one refresh and
/// one re-send, after which the caller sees either the successful response or
/// an API error with status 401.
///
/// # Example
///
/// ```rust,ignore
/// use zoho_client::{Region, ZohoClient};
/// use zoho_auth::StaticTokenProvider;
///
/// let client = ZohoClient::new(
///     Region::Us.people_api_url(),
///     StaticTokenProvider::new("1000.xxxx.yyyy"),
/// )?;
///
/// let forms: serde_json::Value = client.get_json("forms", &[]).await?;
/// ```
#[derive(Clone)]
pub struct ZohoClient<P> {
    http: ZohoHttpClient,
    base_url: String,
    provider: P,
}

impl<P> std::fmt::Debug for ZohoClient<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZohoClient")
            .field("base_url", &self.base_url)
            .field("provider", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl<P: TokenProvider> ZohoClient<P> {
    /// Create a new client for the given API root.
    pub fn new(base_url: impl Into<String>, provider: P) -> Result<Self> {
        Self::with_config(base_url, provider, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        provider: P,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "Unsupported scheme in base URL: {}",
                parsed.scheme()
            ))));
        }

        let http = ZohoHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            provider,
        })
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the token provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Get the pagination limits.
    pub fn pagination(&self) -> &PaginationConfig {
        &self.http.config().pagination
    }

    /// Build the full URL for a path.
    ///
    /// Absolute URLs are returned unchanged; anything else is joined onto the
    /// API root.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self, query), fields(params = query.len()))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let request = self.http.get(self.url(path)).query_pairs(query);
        let response = self.send_authorized(request).await?;
        response.json().await
    }

    /// Send a request with a provider token, refreshing once on 401.
    pub async fn send_authorized(&self, request: RequestBuilder) -> Result<Response> {
        let mut refreshed = false;

        loop {
            let token = self.provider.get_valid_access_token().await?;
            let attempt = request.clone().oauth_token(token);

            match self.http.execute(&attempt).await {
                Err(err) if err.is_auth_expired() && self.may_refresh(refreshed) => {
                    warn!(url = %request.url(), "Access token rejected, refreshing and re-sending once");
                    self.provider.refresh_access_token().await?;
                    refreshed = true;
                }
                Err(err) if err.is_auth_expired() => return Err(err.into_api_error()),
                result => return result,
            }
        }
    }

    fn may_refresh(&self, already_refreshed: bool) -> bool {
        !already_refreshed && self.pagination().max_retries > 0
    }
}
