//! Configuration for the mtailc CLI.
//!
//! Only CLI ergonomics are configurable here - which directories `check`/
//! `dump` search for `.mtail` programs when none are given explicitly, and
//! whether to colorize diagnostic output. Lexing/parsing/scope rules have
//! no knobs; a `mtailc.toml` cannot change what a program means.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "mtailc.toml";

/// Application configuration, loaded from an optional `mtailc.toml`.
///
/// CLI flags always take precedence over a loaded value; a loaded value
/// always takes precedence over the built-in default here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directories to search for `.mtail` programs when none are named on
    /// the command line.
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<String>,

    /// Whether to colorize diagnostic output by default.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_search_dirs() -> Vec<String> {
    vec![".".to_string()]
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self { search_dirs: default_search_dirs(), color: default_color() }
    }
}

impl Config {
    /// Load from `mtailc.toml` in the current directory, or fall back to
    /// the default configuration if it is absent.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::ParseConfig { path: path.display().to_string(), source })
    }
}
