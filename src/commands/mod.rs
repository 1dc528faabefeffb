//! Command dispatch and handlers.

pub mod apply;
pub mod changed;
pub mod class;
pub mod fixtures;
pub mod includes;
pub mod install;
pub mod spec_path;
pub mod specs;

use std::env;
use std::path::PathBuf;

use crate::cli::{Cli, Command, RepoArgs};
use crate::config::Settings;
use crate::context::ServiceContext;

/// Replays git and shell interactions from the named cassette file.
pub const REPLAY_ENV: &str = "ROLESPEC_REPLAY";

/// Records git and shell interactions to the named cassette file.
pub const RECORD_ENV: &str = "ROLESPEC_RECORD";

/// Dispatch a parsed command line to its handler.
///
/// `ROLESPEC_REPLAY=<file>` serves git and shell calls from a cassette;
/// otherwise `ROLESPEC_RECORD=<file>` records them while running live.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = if let Ok(path) = env::var(REPLAY_ENV) {
        ServiceContext::replaying(&PathBuf::from(path))?
    } else if let Ok(path) = env::var(RECORD_ENV) {
        ServiceContext::recording(&PathBuf::from(path))
    } else {
        ServiceContext::live()
    };

    let result = dispatch_with_context(&cli.command, &cli.repo, &ctx);

    // Write the cassette even when the command failed
    if let Some(path) = ctx.finish_recording()? {
        eprintln!("Recording saved to: {}", path.display());
    }
    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    repo: &RepoArgs,
    ctx: &ServiceContext,
) -> Result<(), String> {
    let resolve = || settings(repo, ctx);
    match command {
        Command::Changed => changed::run(ctx, &resolve()?),
        Command::Specs => specs::run(ctx, &resolve()?),
        Command::Class { path } => class::run(&resolve()?, path),
        Command::SpecPath { class } => spec_path::run(&resolve()?, class),
        Command::Includes { class } => includes::run(ctx, &resolve()?, class),
        Command::Fixtures => fixtures::link(ctx, &resolve()?),
        Command::Clean => fixtures::clean(ctx, &resolve()?),
        Command::Install => install::run(ctx, &resolve()?),
        Command::ApplyCommand => apply::run(&repo.basepath),
    }
}

/// Resolve per-invocation settings from the command line.
fn settings(repo: &RepoArgs, ctx: &ServiceContext) -> Result<Settings, String> {
    let mut settings = Settings::resolve(repo.root.clone(), ctx.git.as_ref())
        .map_err(|e| e.to_string())?
        .with_basepath(&repo.basepath)
        .with_basebranch(&repo.basebranch);
    if let Some(path) = &repo.role_path {
        settings = settings.with_role_path(path);
    }
    if let Some(path) = &repo.profile_path {
        settings = settings.with_profile_path(path);
    }
    Ok(settings)
}
