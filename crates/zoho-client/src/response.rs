//! HTTP response handling with Zoho-specific extensions.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};
use crate::DEFAULT_RETRY_AFTER_SECS;

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Create a new Response from a reqwest::Response.
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Retry-After header as a Duration.
    ///
    /// Only the delta-seconds form is understood.
    pub fn retry_after(&self) -> Option<Duration> {
        parse_retry_after(self.header("retry-after"))
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// An empty body deserializes as JSON `null`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.inner.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_value(serde_json::Value::Null).map_err(Into::into);
        }
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Parse a `Retry-After` header value in seconds.
pub(crate) fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Retry-After for a 429 response, defaulting when absent or unparseable.
pub(crate) fn retry_after_or_default(value: Option<&str>) -> Duration {
    parse_retry_after(value).unwrap_or(Duration::from_secs(DEFAULT_RETRY_AFTER_SECS))
}

/// Extension trait for processing Zoho API responses.
pub trait ResponseExt {
    /// Check for Zoho API errors and convert to the appropriate error type.
    fn check_zoho_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_zoho_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        if status == 429 {
            let retry_after = retry_after_or_default(self.header("retry-after"));
            return Err(Error::new(ErrorKind::RateLimited { retry_after }));
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Convert a non-success status and body into a classified error.
fn parse_error_response(status: u16, body: &str) -> Error {
    let message = extract_error_message(body)
        .map(|m| sanitize_error_message(&m))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_message(status, body));
    let body = if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    };

    let kind = match status {
        401 => ErrorKind::AuthExpired { message, body },
        _ => ErrorKind::Api {
            status: Some(status),
            message,
            body,
        },
    };

    Error::new(kind)
}

fn default_message(status: u16, body: &str) -> String {
    let sanitized = sanitize_error_message(body.trim());
    if sanitized.is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Request failed")
            .to_string()
    } else {
        sanitized
    }
}

/// Best-effort message from the error bodies the Zoho APIs return.
///
/// Covers `{"message"}`, `{"response": {"errors": {"message"}}}`,
/// `{"response": {"message"}}`, `{"error": {"message"}}` and `{"error": "..."}`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    const POINTERS: [&str; 5] = [
        "/message",
        "/response/errors/message",
        "/response/message",
        "/error/message",
        "/error",
    ];

    POINTERS.iter().find_map(|pointer| {
        value
            .pointer(pointer)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    })
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// This function:
/// - Truncates messages longer than 500 characters
/// - Removes anything shaped like a Zoho OAuth token
/// - Removes `Zoho-oauthtoken` header values echoed back by proxies
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    // Zoho access and refresh tokens look like "1000.<hex>.<hex>"
    if let Ok(token_pattern) = regex_lite::Regex::new(r"1000\.[A-Za-z0-9]{16,}\.[A-Za-z0-9]{16,}") {
        sanitized = token_pattern
            .replace_all(&sanitized, "[REDACTED_TOKEN]")
            .to_string();
    }

    if let Ok(header_pattern) = regex_lite::Regex::new(r"Zoho-oauthtoken\s+\S+") {
        sanitized = header_pattern
            .replace_all(&sanitized, "Zoho-oauthtoken [REDACTED]")
            .to_string();
    }

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after(Some("30")), Some(Duration::from_secs(30)));
        assert_eq!(parse_retry_after(Some(" 5 ")), Some(Duration::from_secs(5)));
        assert_eq!(parse_retry_after(Some("soon")), None);
        assert_eq!(parse_retry_after(None), None);
    }

    #[test]
    fn test_retry_after_default() {
        assert_eq!(retry_after_or_default(None), Duration::from_secs(60));
        assert_eq!(
            retry_after_or_default(Some("Wed, 21 Oct 2015 07:28:00 GMT")),
            Duration::from_secs(60)
        );
        assert_eq!(retry_after_or_default(Some("12")), Duration::from_secs(12));
    }

    #[test]
    fn test_parse_crm_style_error() {
        let body = r#"{"code":"INVALID_DATA","details":{},"message":"invalid data","status":"error"}"#;
        let err = parse_error_response(400, body);

        match err.kind {
            ErrorKind::Api {
                status,
                message,
                body: raw,
            } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "invalid data");
                assert_eq!(raw.as_deref(), Some(body));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_parse_people_style_error() {
        let body = r#"{"response":{"message":"Error occurred","errors":{"code":7024,"message":"No records found"},"status":1}}"#;
        let err = parse_error_response(404, body);
        assert_eq!(err.to_string(), "No records found (HTTP 404)");
    }

    #[test]
    fn test_parse_unauthorized_is_auth_expired() {
        let body = r#"{"code":"INVALID_TOKEN","message":"invalid oauth token","status":"error"}"#;
        let err = parse_error_response(401, body);
        assert!(err.is_auth_expired());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_parse_empty_body_uses_reason_phrase() {
        let err = parse_error_response(503, "");
        assert_eq!(err.to_string(), "Service Unavailable (HTTP 503)");
        assert_eq!(err.body(), None);
    }

    #[test]
    fn test_parse_plain_text_body() {
        let err = parse_error_response(502, "upstream gateway exploded");
        assert_eq!(err.to_string(), "upstream gateway exploded (HTTP 502)");
    }

    #[test]
    fn test_sanitize_redacts_tokens() {
        let message = "token 1000.0123456789abcdef0123.fedcba9876543210fedc rejected";
        let sanitized = sanitize_error_message(message);
        assert_eq!(sanitized, "token [REDACTED_TOKEN] rejected");

        let message = "header was Zoho-oauthtoken abc.def";
        assert_eq!(
            sanitize_error_message(message),
            "header was Zoho-oauthtoken [REDACTED]"
        );
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "x".repeat(800);
        let sanitized = sanitize_error_message(&long);
        assert!(sanitized.ends_with("...[truncated]"));
        assert_eq!(sanitized.len(), 500 + "...[truncated]".len());
    }
}
