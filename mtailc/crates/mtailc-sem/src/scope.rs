use indexmap::IndexMap;

use mtailc_util::{Idx, IndexVec, Span, Symbol};

use crate::symbol::{Binding, SymbolEntry, SymbolKind};

/// Identifies one scope ("rib") in a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RibId(pub u32);

impl Idx for RibId {
    fn from_usize(idx: usize) -> Self {
        RibId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of block introduced a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibKind {
    /// The top-level program scope.
    Program,
    /// A `Cond` block's body.
    CondBody,
    /// A `Cond` block's `else` body.
    CondElse,
    /// A `def` decorator's body.
    DefBody,
    /// An `@name { ... }` decorator invocation's body.
    DecoBody,
}

/// A single scope. Symbols are keyed by `(name, kind)` so a counter named
/// `foo`, a capture group `$foo`, and a decorator `foo` can all coexist.
#[derive(Debug)]
pub struct Rib<M> {
    pub bindings: IndexMap<(Symbol, SymbolKind), SymbolEntry<M>>,
    pub parent: Option<RibId>,
    pub kind: RibKind,
}

/// Tracks the nested scopes of one mtail program while it is being parsed.
///
/// Ribs are never removed once pushed; `pop_scope` only moves the current
/// pointer back to the parent, so a [`SymbolEntry`] handed out by `add_sym`
/// stays valid for as long as whatever AST node holds it, even after its
/// scope has been popped.
pub struct ScopeTree<M> {
    pub ribs: IndexVec<RibId, Rib<M>>,
    pub current: RibId,
}

impl<M: Clone> ScopeTree<M> {
    pub fn new() -> Self {
        let mut ribs = IndexVec::new();
        let root = ribs.push(Rib {
            bindings: IndexMap::new(),
            parent: None,
            kind: RibKind::Program,
        });
        Self { ribs, current: root }
    }

    /// Pushes a new scope as a child of the current one and returns its id.
    pub fn push_scope(&mut self, kind: RibKind) -> RibId {
        let rib = self.ribs.push(Rib {
            bindings: IndexMap::new(),
            parent: Some(self.current),
            kind,
        });
        self.current = rib;
        rib
    }

    /// Pops back to the parent of the current scope. A no-op at the root.
    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.ribs[self.current].parent {
            self.current = parent;
        }
    }

    /// Adds a symbol to the current scope. A symbol already declared under
    /// the same `(name, kind)` in this scope is overwritten: redeclaring a
    /// name within one scope is last-writer-wins, not an error.
    pub fn add_sym(
        &mut self,
        name: Symbol,
        kind: SymbolKind,
        binding: Binding<M>,
        decl_pos: Span,
        addr: Option<usize>,
    ) -> SymbolEntry<M> {
        let entry = SymbolEntry::new(name, kind, binding, decl_pos, addr);
        self.ribs[self.current]
            .bindings
            .insert((name, kind), entry.clone());
        entry
    }

    /// Looks up `name` in `kind`'s namespace, walking outward from the
    /// current scope toward the program root.
    pub fn lookup_sym(&self, name: Symbol, kind: SymbolKind) -> Option<&SymbolEntry<M>> {
        let mut rib_id = self.current;
        loop {
            let rib = &self.ribs[rib_id];
            if let Some(entry) = rib.bindings.get(&(name, kind)) {
                return Some(entry);
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return None,
            }
        }
    }
}

impl<M: Clone> Default for ScopeTree<M> {
    fn default() -> Self {
        Self::new()
    }
}
