//! YAML cassettes of recorded transport exchanges, used to replay the link
//! service in tests.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
