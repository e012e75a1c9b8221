//! mtailc-sem - scope and symbol resolution for mtail programs.
//!
//! A mtail program is a flat sequence of declarations and pattern-action
//! blocks; the only nesting comes from `Cond` bodies (and their optional
//! `else` bodies) and `def` decorator bodies. This crate tracks that block
//! structure as a [`ScopeTree`] and the three symbol namespaces that can
//! coexist within it ([`SymbolKind`]):
//!
//! - `IdSymbol` - a plain identifier, bound by `counter`/`gauge`/`hidden`.
//! - `CaprefSymbol` - a capture group reference, `$name` or `$N`, bound by
//!   the nearest enclosing `Regex`.
//! - `DefSymbol` - a decorator name, bound by `def`.
//!
//! `mtailc-par` drives this crate directly while building the AST; there is
//! no separate resolution pass run afterward. Symbols are never removed
//! once added, so a symbol handed to an AST node stays valid even once its
//! scope has been popped.

pub mod metric;
pub mod scope;
pub mod symbol;

#[cfg(test)]
mod edge_cases;

pub use metric::{MetricFactory, MetricKind, MetricStore};
pub use scope::{Rib, RibId, RibKind, ScopeTree};
pub use symbol::{Binding, SymbolEntry, SymbolKind};

mtailc_util::define_idx!(NodeId);
