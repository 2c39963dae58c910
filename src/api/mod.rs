//! High-level entrypoint: the line-oriented lowercasing loop.
//! Prefer [`lowercase_stream`] over calling `core` and `io` directly when
//! embedding the filter in another application.
use std::io::{self, BufRead, Write};

use crate::core::casing::lowercase;
use crate::error::{Error, Result};

/// Summary of one filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamReport {
    /// Number of lines read, lowercased, and written.
    pub lines: usize,
}

/// Lowercase `input` line by line into `output`, preserving line order.
///
/// Each source line arrives with its newline stripped, is mapped through the
/// shared [`lowercase`] utility, and is written back with a single trailing
/// newline. The writer is flushed before returning; on error, nothing beyond
/// the already-flushed output is guaranteed.
///
/// Invalid UTF-8 in the input is fatal and reported as [`Error::Decode`] with
/// the 1-based number of the offending line.
pub fn lowercase_stream<R: BufRead, W: Write>(input: R, mut output: W) -> Result<StreamReport> {
    let mut lines = 0usize;

    for line in input.lines() {
        let line = line.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => Error::Decode {
                line: lines + 1,
                source,
            },
            _ => Error::Io(source),
        })?;
        writeln!(output, "{}", lowercase(&line))?;
        lines += 1;
    }

    output.flush()?;
    Ok(StreamReport { lines })
}
