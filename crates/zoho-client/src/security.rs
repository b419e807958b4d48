//! Security utilities for building Zoho API paths.
//!
//! Module identifiers and record ids come from LLM tool calls and other
//! untrusted callers. They MUST go through this module before they are placed
//! in a URL path.
//!
//! ```rust
//! use zoho_client::security::path;
//!
//! // CORRECT - validate identifiers, encode ids
//! assert!(path::is_safe_module_name("employees"));
//! let segment = path::encode_segment("4000/../../admin");
//! assert_eq!(segment, "4000%2F..%2F..%2Fadmin");
//!
//! // WRONG - NEVER do this with user input
//! // let url = format!("forms/{}/getRecords", user_module);
//! ```

/// Path validation and encoding.
pub mod path {
    /// Validate that a module identifier is safe to place in a path.
    ///
    /// Module identifiers are non-empty, at most 128 characters, and contain
    /// only ASCII alphanumerics, `_` and `-`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zoho_client::security::path;
    ///
    /// assert!(path::is_safe_module_name("P_Employee"));
    /// assert!(path::is_safe_module_name("leave-types"));
    /// assert!(!path::is_safe_module_name("../forms"));
    /// assert!(!path::is_safe_module_name(""));
    /// ```
    #[must_use]
    pub fn is_safe_module_name(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= 128
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    /// Percent-encode a value for use as a single path segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zoho_client::security::path;
    ///
    /// assert_eq!(path::encode_segment("412762000001234567"), "412762000001234567");
    /// assert_eq!(path::encode_segment("a b"), "a%20b");
    /// ```
    #[must_use]
    pub fn encode_segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::path::*;

    #[test]
    fn test_is_safe_module_name() {
        assert!(is_safe_module_name("employees"));
        assert!(is_safe_module_name("P_ClientDetails"));
        assert!(is_safe_module_name("time-logs"));
        assert!(is_safe_module_name("form123"));

        assert!(!is_safe_module_name(""));
        assert!(!is_safe_module_name("forms/employee"));
        assert!(!is_safe_module_name("employee?x=1"));
        assert!(!is_safe_module_name("emp loyee"));
        assert!(!is_safe_module_name("..%2F"));
        assert!(!is_safe_module_name(&"a".repeat(129)));
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("123"), "123");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("x?y=z"), "x%3Fy%3Dz");
        assert_eq!(encode_segment("#frag"), "%23frag");
    }
}
