//! Cassette data structures for recording and replaying interactions.

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded exchange with a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "http").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// An ordered sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Read a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a cassette.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("failed to parse cassette {}: {e}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_yaml() {
        let yaml = r#"
name: hand-written
recorded_at: 2026-01-02T03:04:05Z
interactions:
  - seq: 0
    port: http
    method: get
    input:
      url: http://go.servr.link/api/discord/isregistered?id=1
    output:
      Ok:
        status: 200
        reason: OK
        body: '{"success":true,"registered":false}'
"#;
        let cassette: Cassette = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(cassette.name, "hand-written");
        assert_eq!(cassette.recorded_at.to_rfc3339(), "2026-01-02T03:04:05+00:00");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].output["Ok"]["status"], json!(200));
        assert_eq!(
            cassette.interactions[0].output["Ok"]["body"],
            json!(r#"{"success":true,"registered":false}"#)
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(Path::new("/nonexistent/servrlink.cassette.yaml")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_rejects_non_cassette_yaml() {
        let dir = std::env::temp_dir().join("servrlink_cassette_format_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bogus.cassette.yaml");
        std::fs::write(&path, "just: a map\n").unwrap();

        let err = Cassette::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
