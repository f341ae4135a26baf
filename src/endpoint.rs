//! Endpoint table mapping (operation, identifier kind) to a query URL.

use url::Url;

use crate::identifier::{Identifier, IdentifierKind};

/// Lookup performed against the link service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Does the identifier have a link on record?
    IsRegistered,
    /// What is the identifier linked to?
    Resolve,
}

/// One of the four service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the service base address.
    pub path: &'static str,
    /// Name of the query parameter carrying the identifier.
    pub param: &'static str,
}

impl Endpoint {
    /// Select the endpoint for an operation on a given identifier kind.
    #[must_use]
    pub const fn for_lookup(operation: Operation, kind: IdentifierKind) -> Self {
        let (path, param) = match (operation, kind) {
            (Operation::IsRegistered, IdentifierKind::Chat) => ("discord/isregistered", "id"),
            (Operation::Resolve, IdentifierKind::Chat) => ("discord/getuuid", "id"),
            (Operation::IsRegistered, IdentifierKind::Game) => ("minecraft/isregistered", "uuid"),
            (Operation::Resolve, IdentifierKind::Game) => ("minecraft/getid", "uuid"),
        };
        Self { path, param }
    }

    /// Build the full query URL for `identifier` under `base`.
    ///
    /// `base` must be hierarchical, which [`crate::ClientConfig`] guarantees.
    /// Any query or fragment on `base` is replaced.
    #[must_use]
    pub fn url(&self, base: &Url, identifier: &Identifier) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(self.path.split('/'));
        }
        url.set_fragment(None);
        url.query_pairs_mut().clear().append_pair(self.param, identifier.as_str());
        url
    }
}
