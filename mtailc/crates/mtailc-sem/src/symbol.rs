//! Symbol table entries produced by scope resolution.
//!
//! Distinct from [`mtailc_util::Symbol`], which is just an interned
//! identifier string: a [`SymbolEntry`] here binds one such name, in one
//! namespace, to whatever it actually resolves to.

use mtailc_util::{Span, Symbol};

use crate::NodeId;

/// Which namespace a symbol lives in. mtail keeps these separate so that a
/// counter named `foo`, a capture group `$foo`, and a decorator `foo` can
/// all be in scope at once without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A plain identifier, bound by a `counter`/`gauge`/`hidden` declaration.
    IdSymbol,
    /// A capture group reference, `$name` or `$N`.
    CaprefSymbol,
    /// A decorator name, bound by `def`.
    DefSymbol,
}

/// What a symbol resolves to.
#[derive(Debug, Clone)]
pub enum Binding<M> {
    /// An `IdSymbol` bound to the metric handle created for its declaration.
    Metric(M),
    /// A `CaprefSymbol` bound to the `Regex` node whose capture groups it
    /// indexes.
    Regex(NodeId),
    /// A `DefSymbol` bound to the `Def` node it names.
    Def(NodeId),
}

/// A resolved symbol-table entry, matching one `(name, kind)` pair in a
/// scope.
#[derive(Debug, Clone)]
pub struct SymbolEntry<M> {
    pub name: Symbol,
    pub kind: SymbolKind,
    pub binding: Binding<M>,
    pub decl_pos: Span,
    /// Capture group index within its owning regex: 0 for the whole match
    /// (`$0`), 1 for the first group, and so on. `None` outside
    /// `CaprefSymbol`.
    pub addr: Option<usize>,
}

impl<M> SymbolEntry<M> {
    pub fn new(
        name: Symbol,
        kind: SymbolKind,
        binding: Binding<M>,
        decl_pos: Span,
        addr: Option<usize>,
    ) -> Self {
        Self {
            name,
            kind,
            binding,
            decl_pos,
            addr,
        }
    }
}
