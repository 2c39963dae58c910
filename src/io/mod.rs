//! I/O layer: where the lines come from.
//! Provides [`InputSource`], the file-or-stdin selector behind the CLI's
//! `--filename` option.
pub mod source;
pub use source::InputSource;
