//! Port traits defining external boundaries.
//!
//! The only boundary is the HTTP transport to the link service.
//! Implementations live in `src/adapters/`.

pub mod http;

pub use http::{HttpResponse, HttpTransport, TransportFuture};
