//! Binary entrypoint for the `rolespec` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A repository-local .env may set ROLESPEC_* defaults and `debug`.
    let _ = dotenvy::dotenv();
    rolespec::logging::init();

    match rolespec::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
