//! OAuth client credentials for Zoho.
//!
//! Secrets are redacted in Debug output.

use zoho_client::Region;

use crate::error::{Error, ErrorKind, Result};

/// Client id, client secret and refresh token for a Zoho self client or
/// server-based application, bound to a data-center region.
#[derive(Clone)]
pub struct ZohoCredentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    region: Region,
    access_token: Option<String>,
}

impl std::fmt::Debug for ZohoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZohoCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("region", &self.region)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ZohoCredentials {
    /// Create credentials for the given region.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            region,
            access_token: None,
        }
    }

    /// Seed an access token obtained elsewhere.
    ///
    /// Its expiry is unknown, so it is used until the upstream rejects it.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `ZOHO_CLIENT_ID`, `ZOHO_CLIENT_SECRET` and `ZOHO_REFRESH_TOKEN`
    /// (required), `ZOHO_REGION` (default `us`) and `ZOHO_ACCESS_TOKEN`
    /// (optional).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::new(ErrorKind::EnvVar(key.to_string())))
        };

        let client_id = required("ZOHO_CLIENT_ID")?;
        let client_secret = required("ZOHO_CLIENT_SECRET")?;
        let refresh_token = required("ZOHO_REFRESH_TOKEN")?;

        let region = match lookup("ZOHO_REGION") {
            Some(code) if !code.trim().is_empty() => code.parse::<Region>()?,
            _ => Region::default(),
        };

        let mut creds = Self::new(client_id, client_secret, refresh_token, region);
        if let Some(token) = lookup("ZOHO_ACCESS_TOKEN").filter(|t| !t.is_empty()) {
            creds = creds.with_access_token(token);
        }

        Ok(creds)
    }

    /// The OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub(crate) fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// The data-center region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The seeded access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
