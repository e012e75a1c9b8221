//! Subcommand implementations for the mtailc CLI.

pub mod common;

pub mod check;
pub mod dump;

pub use check::{run_check, CheckArgs};
pub use dump::{run_dump, DumpArgs};
