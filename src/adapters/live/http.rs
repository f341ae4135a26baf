//! Live adapter for the `HttpTransport` port using `reqwest`.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::TransportError;
use crate::ports::http::{HttpResponse, HttpTransport, TransportFuture};

/// Live transport backed by a `reqwest` client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct LiveHttpTransport {
    client: Client,
}

impl LiveHttpTransport {
    /// Creates a live transport whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the TLS backend or system
    /// configuration cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for LiveHttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(async move {
            let response = self.client.get(url).send().await.map_err(classify)?;

            let status = response.status();
            let body = response.text().await.map_err(classify)?;

            Ok(HttpResponse {
                status: status.as_u16(),
                reason: reason_phrase(status),
                body,
            })
        })
    }
}

/// Reason phrase for `status`, or its numeric form for codes without one.
fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(|| status.as_u16().to_string(), str::to_string)
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
