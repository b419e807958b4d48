//! # zoho-auth
//!
//! Access-token providers for Zoho APIs.
//!
//! ## Security
//!
//! - Secrets and tokens are redacted in Debug output
//! - Tracing skips credential parameters
//! - HTTP error messages mentioning credentials are replaced
//!
//! ## Providers
//!
//! - [`StaticTokenProvider`] - a fixed access token, no refresh
//! - [`OAuthTokenProvider`] - OAuth 2.0 refresh-token flow with in-memory
//!   expiry tracking
//!
//! ## Example
//!
//! ```rust,ignore
//! use zoho_auth::{OAuthTokenProvider, ZohoCredentials};
//! use zoho_client::ZohoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = ZohoCredentials::from_env()?;
//!     let base_url = creds.region().people_api_url();
//!     let client = ZohoClient::new(base_url, OAuthTokenProvider::new(creds))?;
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod oauth;
mod provider;

pub use credentials::ZohoCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, TokenResponse};
pub use provider::{OAuthTokenProvider, StaticTokenProvider};
