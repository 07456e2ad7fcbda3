//! System integration utilities
//!
//! Currently just subprocess output capture: run a command line through the
//! shell and collect what it writes to standard output.

pub mod process;

pub use process::capture_stdout;
