//! Replaying adapters that replay recorded interactions.

pub mod http;

pub use http::ReplayingHttpTransport;

use serde::de::DeserializeOwned;

/// Decode a `Result<T, E>` written by `recording::record_result`.
///
/// # Panics
///
/// Panics if `output` is not an `{"Ok": ..}` or `{"Err": ..}` object, or if
/// the payload does not deserialize. A corrupt cassette is a broken test
/// fixture, not a runtime condition.
pub(crate) fn replay_result<T, E>(output: serde_json::Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let mut map = match output {
        serde_json::Value::Object(map) => map,
        other => panic!("cassette output must be an object with an Ok or Err key, got {other}"),
    };
    if let Some(ok) = map.remove("Ok") {
        return Ok(serde_json::from_value(ok).expect("failed to deserialize recorded Ok value"));
    }
    if let Some(err) = map.remove("Err") {
        return Err(serde_json::from_value(err).expect("failed to deserialize recorded Err value"));
    }
    panic!("cassette output has neither Ok nor Err key: {map:?}");
}
