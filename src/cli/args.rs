use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lowerline",
    version,
    about = "Lowercase text line by line, for use in text-processing pipelines"
)]
pub struct CliArgs {
    /// File with text to be processed; read from stdin when omitted
    #[arg(short = 'f', long)]
    pub filename: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
