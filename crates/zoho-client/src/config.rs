//! Client configuration.

use std::time::Duration;

use crate::retry::RateLimitSchedule;
use crate::MAX_PAGE_SIZE;

/// Configuration for the HTTP client.
///
/// Built once, then handed by value to the client and treated as read-only.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Compression configuration.
    pub compression: CompressionConfig,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
    /// Paging and pacing limits.
    pub pagination: PaginationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            compression: CompressionConfig::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
            pagination: PaginationConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Enable compression for responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.compression.enabled = enabled;
        self.config.compression.accept_compressed = enabled;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Set the pagination limits.
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.config.pagination = pagination;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Configuration for response compression.
#[derive(Debug, Clone)]
pub struct CompressionConfig {
    /// Whether compression is enabled.
    pub enabled: bool,
    /// Accept compressed responses.
    pub accept_compressed: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            accept_compressed: true,
        }
    }
}

impl CompressionConfig {
    /// Disable all compression.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            accept_compressed: false,
        }
    }
}

/// Paging and pacing limits shared by every paginated read.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    /// Page size used when the caller does not ask for one.
    pub default_page_size: u32,
    /// Largest page size sent upstream. Never exceeds [`MAX_PAGE_SIZE`].
    pub max_page_size: u32,
    /// Base delay between page fetches of one pagination loop.
    pub rate_limit_delay: Duration,
    /// Upper bound on transparent re-sends of one request. Only the single
    /// re-send after a token refresh is performed; zero disables it.
    pub max_retries: u32,
    /// Record cap for a full pagination run when the caller sets none.
    pub max_records_per_batch: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: MAX_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            rate_limit_delay: Duration::from_millis(1000),
            max_retries: 3,
            max_records_per_batch: 5000,
        }
    }
}

impl PaginationConfig {
    /// Set the default page size.
    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Set the maximum page size (still capped at [`MAX_PAGE_SIZE`]).
    pub fn with_max_page_size(mut self, size: u32) -> Self {
        self.max_page_size = size;
        self
    }

    /// Set the base inter-page delay.
    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Set the maximum number of transparent re-sends.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the default record cap for full pagination.
    pub fn with_max_records_per_batch(mut self, max: usize) -> Self {
        self.max_records_per_batch = max;
        self
    }

    /// Effective page-size ceiling.
    pub fn page_size_ceiling(&self) -> u32 {
        self.max_page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Resolve a caller-requested page size into the value sent upstream.
    ///
    /// Falls back to the default size, and always lands in `1..=ceiling`.
    pub fn clamp_page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.page_size_ceiling())
    }

    /// Delay schedule applied between page fetches.
    pub fn rate_limit_schedule(&self) -> RateLimitSchedule {
        RateLimitSchedule::new(self.rate_limit_delay)
    }
}
