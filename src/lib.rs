//! # zoho-api
//!
//! A Zoho API client library for Rust.
//!
//! This library provides typed access to Zoho APIs with pluggable
//! authentication, rate-limit signalling and response normalization.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//! - Module identifiers are validated before they reach a URL path
//!
//! ## Crates
//!
//! - **zoho-client** - Core HTTP client: regions, token providers, 401 refresh, 429 signalling
//! - **zoho-auth** - Authentication: OAuth 2.0 refresh-token flow, static tokens, credentials
//! - **zoho-people** - People API: modules, fields, records, pagination, timelines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zoho_api::{AllRecordsOptions, PeopleClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // ZOHO_CLIENT_ID, ZOHO_CLIENT_SECRET, ZOHO_REFRESH_TOKEN, ZOHO_REGION
//!     let client = PeopleClient::from_env()?;
//!
//!     let employees = client
//!         .get_all_records("employee", &AllRecordsOptions::default())
//!         .await?;
//!
//!     for record in &employees.data {
//!         println!("{} {:?}", record.id, record.get("FirstName"));
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use zoho_auth as auth;
#[cfg(feature = "client")]
pub use zoho_client as client;
#[cfg(feature = "people")]
pub use zoho_people as people;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use zoho_auth::{OAuthTokenProvider, StaticTokenProvider, ZohoCredentials};
#[cfg(feature = "client")]
pub use zoho_client::{ClientConfig, Error, ErrorKind, PaginationConfig, Region, TokenProvider};
#[cfg(feature = "people")]
pub use zoho_people::{
    AllRecordsOptions, ListOptions, PeopleClient, SearchOptions, SortOrder, TimelineOptions,
};
