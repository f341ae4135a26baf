//! HTTP transport port for GET requests against the link service.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Boxed future type alias used by [`HttpTransport`] to keep the trait dyn-compatible.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>>;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase for the status (e.g. `"Not Found"`).
    pub reason: String,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response carrying `body`.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, reason: "OK".into(), body: body.into() }
    }
}

/// Performs GET requests.
///
/// Implementations hold no per-call state, so one transport may serve any
/// number of concurrent lookups.
pub trait HttpTransport: Send + Sync {
    /// Issues a GET for `url` and reads the whole body.
    ///
    /// Non-success statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response could be obtained.
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a>;
}
