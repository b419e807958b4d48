//! Error types for zoho-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for zoho-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for zoho-auth operations.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error reported by the Zoho accounts server.
    #[error("OAuth error: {error} - {description}")]
    OAuth { error: String, description: String },

    /// Token endpoint answered without an access token.
    #[error("Token invalid: {0}")]
    TokenInvalid(String),

    /// HTTP error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        let sanitized = if message.contains("refresh_token") || message.contains("client_secret") {
            "HTTP request failed (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Http(sanitized), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<zoho_client::Error> for Error {
    fn from(err: zoho_client::Error) -> Self {
        Error::with_source(ErrorKind::Config(err.to_string()), err)
    }
}

impl From<Error> for zoho_client::Error {
    fn from(err: Error) -> Self {
        zoho_client::Error::with_source(
            zoho_client::ErrorKind::TokenProvider(err.to_string()),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_error_display() {
        let err = Error::new(ErrorKind::OAuth {
            error: "invalid_code".into(),
            description: "refresh token rejected".into(),
        });
        assert_eq!(
            err.to_string(),
            "OAuth error: invalid_code - refresh token rejected"
        );
    }

    #[test]
    fn test_bridge_into_client_error() {
        let err = Error::new(ErrorKind::EnvVar("ZOHO_CLIENT_ID".into()));
        let client_err: zoho_client::Error = err.into();

        assert!(matches!(
            client_err.kind,
            zoho_client::ErrorKind::TokenProvider(ref msg) if msg.contains("ZOHO_CLIENT_ID")
        ));
        assert!(!client_err.is_classified());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }
}
