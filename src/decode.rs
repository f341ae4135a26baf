//! Decoding of link service responses into a normalized [`LookupResult`].
//!
//! The service is inconsistent about the counterpart field. A chat ID may
//! arrive as a JSON number or a string under `id`, and a UUID may arrive
//! under `uuid` or under `id`. Candidates are read as a tagged variant and
//! tried in a fixed order per query direction; the first one carrying a
//! usable value wins. Only `success` is decoded strictly: a field of an
//! unexpected type is treated as absent, so an unsuccessful response is
//! always reported as such.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::identifier::IdentifierKind;

/// Normalized body of a single lookup response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Whether the service accepted and processed the request.
    pub success: bool,
    /// Registration flag, present on registration checks.
    pub registered: Option<bool>,
    /// Counterpart identifier, present on successful resolves.
    pub linked_id: Option<String>,
}

/// A counterpart field as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LinkedIdField {
    Numeric(u64),
    Text(String),
    Other(serde_json::Value),
}

impl LinkedIdField {
    /// The value as a string, or `None` for the service's empty placeholders
    /// (`0` and `""`), which never name a real account, and for values of
    /// any other JSON type.
    fn into_meaningful(self) -> Option<String> {
        match self {
            Self::Numeric(0) | Self::Other(_) => None,
            Self::Numeric(n) => Some(n.to_string()),
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s),
        }
    }
}

#[derive(Deserialize)]
struct RawLookup {
    success: bool,
    registered: Option<serde_json::Value>,
    id: Option<LinkedIdField>,
    uuid: Option<LinkedIdField>,
}

/// Field names that may carry the counterpart, in priority order, for a
/// query keyed by `queried`.
#[must_use]
pub fn counterpart_fields(queried: IdentifierKind) -> &'static [&'static str] {
    match queried {
        IdentifierKind::Game => &["id"],
        IdentifierKind::Chat => &["uuid", "id"],
    }
}

/// Decode a response body for a query keyed by an identifier of kind `queried`.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if the body is not a JSON object with a
/// boolean `success`.
pub fn decode(body: &str, queried: IdentifierKind) -> Result<LookupResult, DecodeError> {
    let raw: RawLookup = serde_json::from_str(body)?;
    let RawLookup { success, registered, mut id, mut uuid } = raw;

    let linked_id = counterpart_fields(queried).iter().find_map(|field| {
        let candidate = match *field {
            "id" => id.take(),
            "uuid" => uuid.take(),
            _ => None,
        };
        candidate.and_then(LinkedIdField::into_meaningful)
    });

    let registered = registered.as_ref().and_then(serde_json::Value::as_bool);

    Ok(LookupResult { success, registered, linked_id })
}
