//! # zoho-client
//!
//! Core HTTP client infrastructure for Zoho APIs.
//!
//! This crate provides the foundational HTTP client with:
//! - Pluggable access-token providers with a single refresh-and-resend on 401
//! - Rate limit detection (HTTP 429) with `Retry-After` parsing
//! - A fixed exponential delay schedule for paginated reads
//! - Data-center aware base URLs
//! - Centralized normalization of heterogeneous response bodies
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (zoho-people, ...)                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ZohoClient<P>                          │
//! │  - Holds base URL + token provider + HTTP client            │
//! │  - Provides typed JSON methods (get_json)                   │
//! │  - Refreshes the token and re-sends once on 401             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ZohoHttpClient                          │
//! │  - Raw HTTP with compression and timeouts                   │
//! │  - Status classification (401 / 429 / other)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use zoho_client::{ClientConfig, Region, ZohoClient};
//! use zoho_auth::StaticTokenProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zoho_client::Error> {
//!     let provider = StaticTokenProvider::new("1000.xxxx.yyyy");
//!     let client = ZohoClient::with_config(
//!         Region::Eu.people_api_url(),
//!         provider,
//!         ClientConfig::default(),
//!     )?;
//!
//!     let forms: serde_json::Value = client.get_json("forms", &[]).await?;
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod region;
mod request;
mod response;
mod retry;
pub mod security;
pub mod shape;
mod zoho_client;

pub use auth::TokenProvider;
pub use client::ZohoHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, CompressionConfig, PaginationConfig};
pub use error::{Error, ErrorKind, Result};
pub use region::Region;
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};
pub use retry::RateLimitSchedule;
pub use zoho_client::ZohoClient;

/// Hard upstream ceiling on records per page.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Retry-After used when a 429 response carries no parseable header.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Authorization scheme Zoho expects in front of OAuth access tokens.
pub const AUTH_SCHEME: &str = "Zoho-oauthtoken";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("zoho-api/", env!("CARGO_PKG_VERSION"));
