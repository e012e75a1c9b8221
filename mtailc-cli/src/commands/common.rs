//! Shared helpers for the `check` and `dump` subcommands.

use std::path::{Path, PathBuf};

use mtailc_util::diagnostic::{Diagnostic, Level};

use crate::error::{CliError, Result};

/// Extension used for mtail programs.
pub const MTAIL_EXTENSION: &str = "mtail";

/// Resolve the set of program files to operate on: the files given
/// explicitly, or every `.mtail` file under `search_dirs` if none were.
pub fn resolve_inputs(explicit: &[PathBuf], search_dirs: &[String]) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }

    let mut found = Vec::new();
    for dir in search_dirs {
        collect_mtail_files(Path::new(dir), &mut found);
    }
    if found.is_empty() {
        return Err(CliError::NoInputFiles);
    }
    found.sort();
    Ok(found)
}

fn collect_mtail_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(MTAIL_EXTENSION) {
            out.push(path);
        }
    }
}

pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|source| CliError::ReadSource { path: path.display().to_string(), source })
}

/// Print one file's diagnostics to stderr, `rustc`-ish: `path:line:col: level: message`.
pub fn print_diagnostics(path: &Path, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        let level = match diag.level {
            Level::Error => "error",
            Level::Warning => "warning",
            _ => "note",
        };
        eprintln!("{}:{}:{}: {}: {}", path.display(), diag.span.line, diag.span.column, level, diag.message);
    }
}
