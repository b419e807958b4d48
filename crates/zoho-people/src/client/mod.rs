//! Zoho People REST API client.
//!
//! This client wraps `ZohoClient` from `zoho-client` and provides typed
//! methods for module discovery, field discovery, record search and listing,
//! full pagination and record timelines.

use zoho_auth::{OAuthTokenProvider, ZohoCredentials};
use zoho_client::security::path;
use zoho_client::{ClientConfig, PaginationConfig, Region, TokenProvider, ZohoClient};

use crate::error::{Error, ErrorKind, Result};

mod fields;
mod modules;
mod pagination;
mod records;
mod timeline;

pub use pagination::MAX_PAGE_FETCHES;

/// Zoho People REST API client.
///
/// Every method except [`get_timeline`](PeopleClient::get_timeline) fails with
/// a typed error: [`ErrorKind::RateLimited`] for HTTP 429 and
/// [`ErrorKind::Api`] for everything else. An expired token is refreshed and
/// the request re-sent once before any error is reported.
///
/// # Example
///
/// ```rust,ignore
/// use zoho_auth::StaticTokenProvider;
/// use zoho_client::Region;
/// use zoho_people::{ListOptions, PeopleClient, SortOrder};
///
/// let client = PeopleClient::new(Region::Eu, StaticTokenProvider::new("1000.xxxx.yyyy"))?;
///
/// let modules = client.get_modules().await?;
/// let fields = client.get_fields("employees").await?;
/// let page = client
///     .get_records("employee", &ListOptions::default().with_sort("Modifiedtime", SortOrder::Desc))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct PeopleClient<P> {
    client: ZohoClient<P>,
}

impl<P: TokenProvider> PeopleClient<P> {
    /// Create a client for the People API of `region`.
    pub fn new(region: Region, provider: P) -> Result<Self> {
        let client = ZohoClient::new(region.people_api_url(), provider)?;
        Ok(Self { client })
    }

    /// Create a client for an explicit API root with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        provider: P,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = ZohoClient::with_config(base_url, provider, config)?;
        Ok(Self { client })
    }

    /// Create a People client from an existing ZohoClient.
    pub fn from_client(client: ZohoClient<P>) -> Self {
        Self { client }
    }

    /// Get the underlying ZohoClient.
    pub fn inner(&self) -> &ZohoClient<P> {
        &self.client
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Get the paging and pacing limits.
    pub fn pagination(&self) -> &PaginationConfig {
        self.client.pagination()
    }
}

impl PeopleClient<OAuthTokenProvider> {
    /// Create a client from `ZOHO_*` environment variables.
    ///
    /// The API root follows `ZOHO_REGION`.
    pub fn from_env() -> Result<Self> {
        let credentials = ZohoCredentials::from_env()?;
        let base_url = credentials.region().people_api_url();
        let client = ZohoClient::new(base_url, OAuthTokenProvider::new(credentials))?;
        Ok(Self { client })
    }
}

/// Reject module identifiers that cannot be placed in a path as-is.
fn validate_module(module: &str) -> Result<()> {
    if module.trim().is_empty() {
        return Err(Error::new(ErrorKind::InvalidInput(
            "module is required".to_string(),
        )));
    }
    if !path::is_safe_module_name(module) {
        return Err(Error::new(ErrorKind::InvalidInput(format!(
            "invalid module name: {module}"
        ))));
    }
    Ok(())
}

/// Query parameters shared by the paged endpoints.
///
/// Returns the parameters together with the effective page and page size.
fn page_query(
    pagination: &PaginationConfig,
    fields: Option<&[String]>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> (Vec<(String, String)>, u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let per_page = pagination.clamp_page_size(per_page);

    let mut query = Vec::new();
    if let Some(fields) = fields.filter(|f| !f.is_empty()) {
        query.push(("fields".to_string(), fields.join(",")));
    }
    query.push(("page".to_string(), page.to_string()));
    query.push(("per_page".to_string(), per_page.to_string()));

    (query, page, per_page)
}
