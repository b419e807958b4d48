//! Error types for zoho-people.
//!
//! The People client surfaces the transport's taxonomy unchanged so callers
//! can tell a rate limit ([`ErrorKind::RateLimited`]) from any other upstream
//! failure ([`ErrorKind::Api`]).

pub use zoho_client::{Error, ErrorKind, Result};
