//! Command Line Interface (CLI) layer for lowerline.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that wires user-provided options to the library functionality
//! exposed via `lowerline::api`.
//!
//! If you are embedding the filter into another application, prefer using the
//! high-level `lowerline::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
