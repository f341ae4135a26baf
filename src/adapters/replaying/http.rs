//! Replaying adapter for the `HttpTransport` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::TransportError;
use crate::ports::http::{HttpResponse, HttpTransport, TransportFuture};

use super::replay_result;

/// Serves recorded HTTP exchanges from a cassette, in recording order.
pub struct ReplayingHttpTransport {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingHttpTransport {
    /// Creates a replaying transport from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl HttpTransport for ReplayingHttpTransport {
    /// # Panics
    ///
    /// Panics if the cassette is exhausted or the next recorded exchange was
    /// for a different URL.
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        let (recorded_url, output) = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("http", "get");
            (interaction.input["url"].as_str().map(str::to_owned), interaction.output)
        };
        assert_eq!(
            recorded_url.as_deref(),
            Some(url),
            "Cassette mismatch: next recorded http::get was for a different URL"
        );
        let result = replay_result::<HttpResponse, TransportError>(output);
        Box::pin(async move { result })
    }
}
