use std::io::{self, BufWriter};

use tracing::info;

use lowerline::Result;
use lowerline::api::lowercase_stream;
use lowerline::io::InputSource;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<()> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let source = InputSource::from(args.filename);
    match &source {
        InputSource::File(path) => info!("reading from file: {:?}", path),
        InputSource::Stdin => info!("reading from stdin"),
    }

    let reader = source.open()?;
    let stdout = io::stdout().lock();
    let report = lowercase_stream(reader, BufWriter::new(stdout))?;

    info!("lowercased {} lines", report.lines);
    Ok(())
}
