//! `mtailc check` - parse one or more mtail programs and report diagnostics.
//!
//! Exits non-zero if any file fails to parse cleanly. This is the only
//! place in the repository that owns a concrete [`MetricFactory`] /
//! [`MetricStore`] pair; the real exporter mtail ships is out of scope, so
//! this is a small stub that just counts what got registered.

use std::path::PathBuf;

use mtailc_par::Parser;
use mtailc_sem::{MetricFactory, MetricKind, MetricStore};
use mtailc_util::diagnostic::Handler;

use crate::commands::common::{print_diagnostics, read_source, resolve_inputs};
use crate::config::Config;
use crate::error::Result;

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
}

/// A registered metric, as `check` sees it: just enough to report what a
/// program declares, since there is no real exporter behind this stub.
#[derive(Debug, Clone)]
pub struct CountedMetric {
    pub name: String,
    pub program_name: String,
    pub kind: MetricKind,
    pub keys: Vec<String>,
}

/// The CLI's only concrete metric store: counts registrations, keeps no
/// export-side state.
#[derive(Default)]
struct CountingStore {
    registered: Vec<CountedMetric>,
}

impl MetricFactory for CountingStore {
    type Metric = CountedMetric;

    fn new_metric(&mut self, name: &str, program_name: &str, kind: MetricKind, keys: &[String], _hidden: bool) -> CountedMetric {
        CountedMetric { name: name.to_string(), program_name: program_name.to_string(), kind, keys: keys.to_vec() }
    }
}

impl MetricStore<CountedMetric> for CountingStore {
    fn add(&mut self, metric: CountedMetric) {
        self.registered.push(metric);
    }
}

/// Runs `check`, returning `Ok(true)` if every file parsed without errors.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<bool> {
    let files = resolve_inputs(&args.files, &config.search_dirs)?;
    let mut all_clean = true;

    for path in &files {
        let source = read_source(path)?;
        let program_name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("program").to_string();

        let mut handler = Handler::new();
        let parser = Parser::new(&source, &mut handler, program_name, CountingStore::default());
        let (_ast, factory) = parser.parse();

        let diagnostics = handler.diagnostics();
        if !diagnostics.is_empty() {
            print_diagnostics(path, &diagnostics);
        }
        if handler.has_errors() {
            all_clean = false;
        } else {
            tracing::info!(file = %path.display(), metrics = factory.registered.len(), "parsed clean");
        }
    }

    Ok(all_clean)
}
