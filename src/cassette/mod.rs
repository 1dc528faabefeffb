//! Cassettes: recorded port interactions for deterministic replays.
//!
//! A cassette is a YAML file holding every call made through the git and
//! shell ports during one run. Replaying it reproduces the closure without a
//! repository, which is how the integration tests pin behaviour.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
