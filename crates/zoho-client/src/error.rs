//! Error types for zoho-client.

use std::fmt::Display;
use std::time::Duration;

/// Result type alias for zoho-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for zoho-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, ErrorKind::RateLimited { .. })
    }

    /// Returns true if the upstream rejected the access token.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self.kind, ErrorKind::AuthExpired { .. })
    }

    /// Returns true if this is a generic upstream API error.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// Returns the retry-after duration if this is a rate limit error.
    pub fn retry_after(&self) -> Option<Duration> {
        match &self.kind {
            ErrorKind::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Returns the upstream HTTP status, when one is known.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RateLimited { .. } => Some(429),
            ErrorKind::AuthExpired { .. } => Some(401),
            ErrorKind::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the raw upstream body attached to an API error.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { body, .. } | ErrorKind::AuthExpired { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Returns true once the error has been classified as a caller-facing kind.
    pub fn is_classified(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RateLimited { .. } | ErrorKind::Api { .. }
        )
    }

    /// Attach `context` to an error on its way to the caller.
    ///
    /// Unclassified errors become API errors whose message is
    /// `"{context}: {error}"`. An upstream API error gains the same prefix
    /// once and keeps its status and body. Rate-limit errors and API errors
    /// that already carry context are returned unchanged.
    pub fn context(self, context: impl Display) -> Self {
        let pass_through = match self.kind {
            ErrorKind::RateLimited { .. } => true,
            ErrorKind::Api { .. } => self.source.is_some(),
            _ => false,
        };
        if pass_through {
            return self;
        }

        let status = self.status();
        let body = self.body().map(str::to_string);
        let message = match &self.kind {
            ErrorKind::Api { message, .. } => format!("{}: {}", context, message),
            _ => format!("{}: {}", context, self),
        };
        Error {
            kind: ErrorKind::Api {
                status,
                message,
                body,
            },
            source: Some(Box::new(self)),
        }
    }

    /// Convert an exhausted authorization failure into the caller-facing API error.
    pub(crate) fn into_api_error(self) -> Self {
        match self.kind {
            ErrorKind::AuthExpired { message, body } => Error {
                kind: ErrorKind::Api {
                    status: Some(401),
                    message,
                    body,
                },
                source: self.source,
            },
            kind => Error {
                kind,
                source: self.source,
            },
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Upstream rejected the access token (HTTP 401).
    ///
    /// Consumed by the client's refresh-and-resend cycle.
    #[error("Authentication expired: {message}")]
    AuthExpired {
        message: String,
        body: Option<String>,
    },

    /// Rate limit exceeded (HTTP 429).
    #[error("Rate limited, retry after {}s", retry_after.as_secs())]
    RateLimited { retry_after: Duration },

    /// Upstream API failure.
    #[error("{message}{}", status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
    Api {
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },

    /// The token provider could not supply or refresh a token.
    #[error("Token provider error: {0}")]
    TokenProvider(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Api {
                status: Some(status.as_u16()),
                message: err.to_string(),
                body: None,
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
