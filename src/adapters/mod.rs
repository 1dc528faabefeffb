//! Port implementations: live processes, recording wrappers and replays.

pub mod live;
pub mod recording;
pub mod replaying;
