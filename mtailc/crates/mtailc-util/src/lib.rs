//! mtailc-util - core utilities shared by every front-end crate.
//!
//! Provides string interning (`Symbol`), typed arena indices (`IndexVec`/`Idx`),
//! source location tracking (`Span`/`SourceMap`), globally unique definition
//! ids (`DefId`), and the diagnostic/error-reporting infrastructure used by
//! the lexer, parser, and scope resolver.

pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, LabelStyle, Level,
};
pub use error::{
    DiagnosticError, DiagnosticResult, IndexVecError, IndexVecResult, SourceMapError,
    SourceMapResult, SymbolError, SymbolResult,
};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
