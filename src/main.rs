//! lowerline CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the filter,
//! and exit with the appropriate status. For programmatic use, prefer the
//! library API (`lowerline::api`).
//!
//! Exit statuses: 0 on success (including `--help`), 1 on processing or file
//! errors, 2 on malformed arguments. Usage text goes to stderr so stdout stays
//! a pure data channel.

use clap::Parser;
use clap::error::ErrorKind;

mod cli;

fn main() {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            eprint!("{err}");
            std::process::exit(0);
        }
        Err(err) => {
            eprint!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = cli::run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
