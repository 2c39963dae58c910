#![doc = r#"
lowerline — a line-oriented lowercasing filter.

This crate reads text line by line, maps every cased character to its lowercase
form using the standard Unicode conversion, and writes the result out in the
same order. It powers the `lowerline` CLI, a thin preprocessing step for
text-processing pipelines (preparing corpora for statistical machine
translation and the like), and can be embedded in your own Rust applications.

Quick start: lowercase a reader into a writer
---------------------------------------------
```rust
use std::io::Cursor;
use lowerline::lowercase_stream;

fn main() -> lowerline::Result<()> {
    let input = Cursor::new("Hello World\nCAFÉ\n");
    let mut output = Vec::new();

    let report = lowercase_stream(input, &mut output)?;

    assert_eq!(report.lines, 2);
    assert_eq!(output, "hello world\ncafé\n".as_bytes());
    Ok(())
}
```

Reading from a file or stdin
----------------------------
```rust,no_run
use std::io;
use std::path::PathBuf;
use lowerline::{InputSource, lowercase_stream};

fn main() -> lowerline::Result<()> {
    let source = InputSource::File(PathBuf::from("corpus.txt"));
    let reader = source.open()?;
    lowercase_stream(reader, io::stdout().lock())?;
    Ok(())
}
```

Error handling
--------------
All public functions return `lowerline::Result<T>`; match on
`lowerline::Error` to handle specific cases, e.g. a missing input file or an
invalid UTF-8 byte sequence.

Useful modules
--------------
- [`api`] — the high-level `lowercase_stream` entrypoint.
- [`core`] — the shared case-folding utility.
- [`io`] — the file-or-stdin input source.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
pub use api::{StreamReport, lowercase_stream};
pub use core::casing::lowercase;
pub use error::{Error, Result};
pub use io::InputSource;
