//! `mtailc dump` - print the token stream or AST of a mtail program.
//!
//! Debugging aid only; it drives the same `Lexer`/`Parser` `check` uses but
//! prints the intermediate structures instead of just pass/fail.

use std::path::PathBuf;

use mtailc_lex::Lexer;
use mtailc_par::Parser;
use mtailc_sem::{MetricFactory, MetricKind, MetricStore};
use mtailc_util::diagnostic::Handler;

use crate::commands::common::{print_diagnostics, read_source};
use crate::error::Result;

pub struct DumpArgs {
    pub file: PathBuf,
    /// Dump the raw token stream instead of the parsed AST.
    pub tokens: bool,
}

/// A do-nothing metric handle: `dump` only cares about the parse tree, not
/// what a real exporter would do with the declarations in it.
#[derive(Debug, Clone)]
struct NullMetric;

#[derive(Default)]
struct NullStore;

impl MetricFactory for NullStore {
    type Metric = NullMetric;

    fn new_metric(&mut self, _name: &str, _program_name: &str, _kind: MetricKind, _keys: &[String], _hidden: bool) -> NullMetric {
        NullMetric
    }
}

impl MetricStore<NullMetric> for NullStore {
    fn add(&mut self, _metric: NullMetric) {}
}

pub fn run_dump(args: DumpArgs) -> Result<()> {
    let source = read_source(&args.file)?;

    if args.tokens {
        let mut handler = Handler::new();
        for token in Lexer::new(&source, &mut handler) {
            println!("{:?} @ {}:{}", token.kind, token.span.line, token.span.column);
        }
        print_diagnostics(&args.file, &handler.diagnostics());
        return Ok(());
    }

    let program_name = args.file.file_stem().and_then(|s| s.to_str()).unwrap_or("program").to_string();
    let mut handler = Handler::new();
    let parser = Parser::new(&source, &mut handler, program_name, NullStore::default());
    let (ast, _factory) = parser.parse();

    for (i, node) in ast.nodes.iter().enumerate() {
        println!("{:>4}: {:?}", i, node);
    }
    println!("root: {}", ast.root.0);
    print_diagnostics(&args.file, &handler.diagnostics());
    Ok(())
}
