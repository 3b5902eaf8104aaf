//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`report`] - Wiring from parsed arguments to printed output

pub mod args;
pub mod report;

pub use args::{Cli, DiffKind};
pub use report::Report;
