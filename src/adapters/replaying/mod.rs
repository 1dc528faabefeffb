//! Replaying adapters that serve recorded interactions.

pub mod git;
pub mod shell;

pub use git::ReplayingGitRepo;
pub use shell::ReplayingShellExecutor;
