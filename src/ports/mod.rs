//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the closure computation and an
//! external system (git, shell, filesystem). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod git;
pub mod shell;

pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use shell::{ShellExecutor, ShellOutput};
