//! Error handling for the mtailc CLI driver.
//!
//! This is the infrastructural error layer: file I/O and configuration
//! problems the binary itself can hit. Lexer/parser/scope errors never
//! surface here - they are accumulated diagnostics reported by `check`
//! and `dump`, not `Err` values.

use thiserror::Error;

/// Errors the `mtailc` binary can fail with, outside of diagnostics
/// collected from a program it is checking.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read {path}: {source}")]
    ReadSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read configuration file {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no input files given")]
    NoInputFiles,

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
