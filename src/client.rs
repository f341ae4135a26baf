//! The link resolver: classify, build the endpoint, GET, decode.

use std::fmt;
use std::sync::Arc;

use crate::adapters::live::LiveHttpTransport;
use crate::config::ClientConfig;
use crate::decode::{decode, LookupResult};
use crate::endpoint::{Endpoint, Operation};
use crate::error::{DecodeError, LinkError};
use crate::identifier::Identifier;
use crate::ports::http::HttpTransport;

/// Client for the account-linking service.
///
/// Holds no per-call state. Clone it, or share the transport between
/// resolvers, to run lookups concurrently.
#[derive(Clone)]
pub struct LinkResolver {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkResolver").field("config", &self.config).finish_non_exhaustive()
    }
}

impl LinkResolver {
    /// Creates a resolver talking to the live service.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, LinkError> {
        let transport = LiveHttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a resolver that sends requests through `transport`.
    ///
    /// The configured timeout is only applied by transports that honor it;
    /// an injected transport is responsible for its own.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this resolver was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether `input` (a Discord ID or Minecraft UUID) has a link on record.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::RequestNotSuccessful`] if the service reports
    /// failure, or any classification, transport, status, or decode error.
    pub async fn is_registered(&self, input: &str) -> Result<bool, LinkError> {
        let identifier = Identifier::classify(input)?;
        let result = self.execute(Operation::IsRegistered, &identifier).await?;
        result
            .registered
            .ok_or(LinkError::MalformedResponse(DecodeError::MissingField("registered")))
    }

    /// The identifier linked to `input`: a UUID for a Discord ID, a Discord
    /// ID for a UUID.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::RequestNotSuccessful`] if the service reports
    /// failure, or any classification, transport, status, or decode error.
    pub async fn resolve(&self, input: &str) -> Result<String, LinkError> {
        let identifier = Identifier::classify(input)?;
        let result = self.execute(Operation::Resolve, &identifier).await?;
        let field = match identifier {
            Identifier::Chat(_) => "uuid",
            Identifier::Game(_) => "id",
        };
        result.linked_id.ok_or(LinkError::MalformedResponse(DecodeError::MissingField(field)))
    }

    async fn execute(
        &self,
        operation: Operation,
        identifier: &Identifier,
    ) -> Result<LookupResult, LinkError> {
        let url = Endpoint::for_lookup(operation, identifier.kind())
            .url(self.config.base_url(), identifier);

        tracing::debug!(?operation, %url, "querying link service");
        let response = self.transport.get(url.as_str()).await?;
        tracing::debug!(?operation, status = response.status, "link service responded");

        if response.status != 200 {
            tracing::warn!(
                ?operation,
                status = response.status,
                reason = %response.reason,
                "link service returned unexpected status"
            );
            return Err(LinkError::UnexpectedStatus {
                code: response.status,
                text: response.reason,
            });
        }

        let result = decode(&response.body, identifier.kind())?;
        if !result.success {
            tracing::warn!(?operation, identifier = %identifier, "link service reported failure");
            return Err(LinkError::RequestNotSuccessful);
        }
        Ok(result)
    }
}
