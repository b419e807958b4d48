//! Zoho OAuth 2.0 refresh-token flow.
//!
//! Zoho access tokens live for one hour and are minted from a long-lived
//! refresh token at `{accounts}/oauth/v2/token`.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::credentials::ZohoCredentials;
use crate::error::{Error, ErrorKind, Result};

/// OAuth client for the Zoho accounts server.
#[derive(Clone)]
pub struct OAuthClient {
    accounts_url: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("accounts_url", &self.accounts_url)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Create a client for the given accounts server, e.g. `https://accounts.zoho.eu`.
    pub fn new(accounts_url: impl Into<String>) -> Self {
        Self {
            accounts_url: accounts_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// The accounts server this client talks to.
    pub fn accounts_url(&self) -> &str {
        &self.accounts_url
    }

    /// Mint a new access token from the credentials' refresh token.
    ///
    /// Credentials are not logged.
    #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id()))]
    pub async fn refresh_token(&self, credentials: &ZohoCredentials) -> Result<TokenResponse> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token()),
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.client_secret()),
        ];
        let body = serde_urlencoded::to_string(params)?;

        let response = self
            .http_client
            .post(format!("{}/oauth/v2/token", self.accounts_url))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        self.handle_token_response(response).await
    }

    /// Check a token response for errors.
    ///
    /// Zoho reports some failures with HTTP 200 and an `error` field.
    async fn handle_token_response(&self, response: reqwest::Response) -> Result<TokenResponse> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let error: OAuthErrorResponse =
                serde_json::from_str(&text).unwrap_or_else(|_| OAuthErrorResponse {
                    error: format!("http_{}", status.as_u16()),
                    error_description: None,
                });
            return Err(error.into_error());
        }

        let token: TokenResponse = serde_json::from_str(&text)?;
        if let Some(error) = token.error.clone() {
            return Err(OAuthErrorResponse {
                error,
                error_description: None,
            }
            .into_error());
        }

        if token.access_token.is_empty() {
            return Err(Error::new(ErrorKind::TokenInvalid(
                "token response carried no access_token".to_string(),
            )));
        }

        Ok(token)
    }
}

/// Token response from the Zoho accounts server.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// The access token.
    #[serde(default)]
    pub access_token: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// API domain for the account, e.g. `https://www.zohoapis.com`.
    #[serde(default)]
    pub api_domain: Option<String>,
    /// Token type (`Bearer`).
    #[serde(default)]
    pub token_type: Option<String>,
    /// Scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
    /// Error code on a 200 failure response.
    #[serde(default)]
    pub error: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("api_domain", &self.api_domain)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("error", &self.error)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

impl OAuthErrorResponse {
    fn into_error(self) -> Error {
        let description = self
            .error_description
            .unwrap_or_else(|| "token request rejected".to_string());
        Error::new(ErrorKind::OAuth {
            error: self.error,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use zoho_client::Region;

    fn creds() -> ZohoCredentials {
        ZohoCredentials::new("client-id", "client-secret", "refresh-123", Region::Us)
    }

    #[tokio::test]
    async fn test_refresh_token_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=refresh-123"))
            .and(body_string_contains("client_id=client-id"))
            .and(body_string_contains("client_secret=client-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "1000.new.token",
                "expires_in": 3600,
                "api_domain": "https://www.zohoapis.com",
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OAuthClient::new(format!("{}/", mock_server.uri()));
        let token = client.refresh_token(&creds()).await.unwrap();

        assert_eq!(token.access_token, "1000.new.token");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[tokio::test]
    async fn test_error_in_success_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"error": "invalid_code"})),
            )
            .mount(&mock_server)
            .await;

        let client = OAuthClient::new(mock_server.uri());
        let err = client.refresh_token(&creds()).await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::OAuth { ref error, .. } if error == "invalid_code"));
    }

    #[tokio::test]
    async fn test_http_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_client",
                "error_description": "Client authentication failed"
            })))
            .mount(&mock_server)
            .await;

        let client = OAuthClient::new(mock_server.uri());
        let err = client.refresh_token(&creds()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "OAuth error: invalid_client - Client authentication failed"
        );
    }

    #[tokio::test]
    async fn test_non_json_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let client = OAuthClient::new(mock_server.uri());
        let err = client.refresh_token(&creds()).await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::OAuth { ref error, .. } if error == "http_502"));
    }

    #[test]
    fn test_token_response_debug_redacts_token() {
        let token: TokenResponse =
            serde_json::from_value(serde_json::json!({"access_token": "1000.secret.value"}))
                .unwrap();
        assert!(!format!("{:?}", token).contains("1000.secret.value"));
    }
}
