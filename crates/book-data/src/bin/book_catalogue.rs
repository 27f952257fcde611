//! Book catalogue CLI.
//!
//! This binary delegates to `book_data::catalogue_cli` for argument handling
//! and rendering, keeping the behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use book_data::CatalogueSettings;
use book_data::catalogue_cli::{CliError, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Arguments(err)) => {
            // Help and version requests arrive here too; clap picks the exit code.
            if let Err(print_err) = err.print() {
                drop(print_err);
            }
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2))
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    let settings = CatalogueSettings::load_layered()?;
    let mut stdout = io::stdout().lock();
    run(env::args_os(), &settings, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
