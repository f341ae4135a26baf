//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::Path;

use super::format::{Cassette, Interaction};

/// Interactions still to be served, queued per `(port, method)`.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a replayer over a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Load a cassette file and create a replayer over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> io::Result<Self> {
        Cassette::load(path).map(|cassette| Self::new(&cassette))
    }

    /// Number of interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Take the next interaction for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair,
    /// naming what was requested and what the cassette holds.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let Some(queue) = self.queues.get_mut(&(port.to_string(), method.to_string())) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        match queue.pop_front() {
            Some(interaction) => interaction,
            None => panic!(
                "Cassette exhausted: all interactions for port={port:?} method={method:?} \
                 have been consumed"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, url: &str) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!({ "url": url }),
            output: json!({ "Ok": { "seq": seq } }),
        }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), interactions }
    }

    #[test]
    fn serves_each_port_method_stream_in_order() {
        let cassette = make_cassette(vec![
            interaction(0, "http", "get", "http://a/"),
            interaction(1, "other", "call", "http://x/"),
            interaction(2, "http", "get", "http://b/"),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.remaining(), 3);
        assert_eq!(replayer.next_interaction("http", "get").seq, 0);
        assert_eq!(replayer.next_interaction("http", "get").seq, 2);
        assert_eq!(replayer.next_interaction("other", "call").seq, 1);
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_replayer_panics_with_descriptive_message() {
        let cassette = make_cassette(vec![interaction(0, "http", "get", "http://a/")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("http", "get");
        let _ = replayer.next_interaction("http", "get");
    }

    #[test]
    #[should_panic(expected = "no interactions recorded")]
    fn unknown_port_panics() {
        let mut replayer = CassetteReplayer::new(&make_cassette(vec![]));
        let _ = replayer.next_interaction("http", "get");
    }
}
