//! Client for the servr.link account-linking service, which maps Discord
//! account IDs to Minecraft account UUIDs and back.
//!
//! ```no_run
//! # async fn demo() -> Result<(), servrlink::LinkError> {
//! let resolver = servrlink::LinkResolver::new(servrlink::ClientConfig::default())?;
//! let discord_id = resolver.resolve("c3e4a469-2e9d-4cb1-be1b-80fedf40e71b").await?;
//! assert!(resolver.is_registered(&discord_id).await?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cassette;
pub mod client;
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod identifier;
pub mod ports;

pub use client::LinkResolver;
pub use config::{ClientConfig, ConfigError};
pub use decode::LookupResult;
pub use endpoint::{Endpoint, Operation};
pub use error::{DecodeError, InvalidReason, LinkError, TransportError};
pub use identifier::{ChatAccountId, GameAccountId, Identifier, IdentifierKind};
