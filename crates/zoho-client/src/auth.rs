//! Access-token provider contract.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;

/// Supplies OAuth access tokens to the client.
///
/// The client asks for a token before every request and calls
/// [`refresh_access_token`](TokenProvider::refresh_access_token) once when the
/// upstream answers 401. Calls are sequential; implementations only need to be
/// safe for reuse, not for concurrent mutation.
pub trait TokenProvider: Send + Sync {
    /// Return a token that is currently believed to be valid.
    ///
    /// May perform a network refresh. Failures propagate to the caller.
    fn get_valid_access_token(&self) -> impl Future<Output = Result<String>> + Send;

    /// Force a refresh of the current token.
    fn refresh_access_token(&self) -> impl Future<Output = Result<()>> + Send;
}

impl<P: TokenProvider> TokenProvider for Arc<P> {
    fn get_valid_access_token(&self) -> impl Future<Output = Result<String>> + Send {
        (**self).get_valid_access_token()
    }

    fn refresh_access_token(&self) -> impl Future<Output = Result<()>> + Send {
        (**self).refresh_access_token()
    }
}
