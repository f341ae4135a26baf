//! Recording adapter for the `HttpTransport` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::http::{HttpTransport, TransportFuture};

/// Records HTTP exchanges while delegating to an inner transport.
pub struct RecordingHttpTransport {
    inner: Arc<dyn HttpTransport>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingHttpTransport {
    /// Creates a recording transport wrapping `inner`.
    pub fn new(inner: Arc<dyn HttpTransport>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl HttpTransport for RecordingHttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(async move {
            let result = self.inner.get(url).await;
            record_result(&self.recorder, "http", "get", &json!({ "url": url }), &result);
            result
        })
    }
}
