//! HTTP client trait.
//!
//! [`HttpClient`] is the transport seam of the library: the Confluence
//! client builds a complete [`Request`] and hands it over. The production
//! implementation lives in `confluence-api` (`HyperClient`); tests plug in
//! recording fakes.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations perform exactly one round trip per call: no retries, no
/// redirects, no caching.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// Any status code is a successful round trip; mapping statuses to errors
    /// is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<T: HttpClient> HttpClient for std::sync::Arc<T> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}
