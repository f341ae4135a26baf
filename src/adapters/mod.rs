//! Adapters implementing the port traits.
//!
//! - `live`: real network access.
//! - `recording`: wraps another adapter and captures each exchange.
//! - `replaying`: serves captured exchanges back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
