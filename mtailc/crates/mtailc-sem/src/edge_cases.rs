//! Edge case tests for mtailc-sem

#[cfg(test)]
mod tests {
    use crate::scope::{RibId, RibKind, ScopeTree};
    use crate::symbol::{Binding, SymbolKind};
    use crate::NodeId;
    use mtailc_util::{Span, Symbol};

    fn pos() -> Span {
        Span::new(0, 0, 1, 1)
    }

    #[test]
    fn test_edge_new_scope_tree_resolves_nothing() {
        let tree: ScopeTree<u32> = ScopeTree::new();
        assert!(tree
            .lookup_sym(Symbol::intern("nonexistent"), SymbolKind::IdSymbol)
            .is_none());
    }

    #[test]
    fn test_edge_pop_scope_at_root_is_a_no_op() {
        let mut tree: ScopeTree<u32> = ScopeTree::new();
        let root = tree.current;
        tree.pop_scope();
        assert_eq!(tree.current, root);
    }

    #[test]
    fn test_edge_deeply_nested_scopes_resolve_to_program_root() {
        let mut tree: ScopeTree<u32> = ScopeTree::new();
        let name = Symbol::intern("lines_total");
        tree.add_sym(name, SymbolKind::IdSymbol, Binding::Metric(7), pos(), None);

        for _ in 0..50 {
            tree.push_scope(RibKind::CondBody);
        }
        assert!(tree.lookup_sym(name, SymbolKind::IdSymbol).is_some());

        for _ in 0..50 {
            tree.pop_scope();
        }
        assert_eq!(tree.current, RibId(0));
    }

    #[test]
    fn test_edge_else_scope_does_not_see_sibling_cond_scope() {
        let mut tree: ScopeTree<u32> = ScopeTree::new();
        tree.push_scope(RibKind::CondBody);
        let inner = Symbol::intern("inner_only");
        tree.add_sym(inner, SymbolKind::IdSymbol, Binding::Metric(1), pos(), None);
        tree.pop_scope();

        tree.push_scope(RibKind::CondElse);
        assert!(tree.lookup_sym(inner, SymbolKind::IdSymbol).is_none());
    }

    #[test]
    fn test_edge_capref_and_id_symbol_same_name_are_independent() {
        let mut tree: ScopeTree<u32> = ScopeTree::new();
        let name = Symbol::intern("status");
        tree.add_sym(name, SymbolKind::IdSymbol, Binding::Metric(1), pos(), None);
        tree.add_sym(
            name,
            SymbolKind::CaprefSymbol,
            Binding::Regex(NodeId(0)),
            pos(),
            Some(3),
        );

        let id = tree.lookup_sym(name, SymbolKind::IdSymbol).unwrap();
        let capref = tree.lookup_sym(name, SymbolKind::CaprefSymbol).unwrap();
        assert!(matches!(id.binding, Binding::Metric(1)));
        assert_eq!(capref.addr, Some(3));
    }

    #[test]
    fn test_edge_def_symbol_resolves_across_nested_scope() {
        let mut tree: ScopeTree<u32> = ScopeTree::new();
        let deco = Symbol::intern("common_log");
        tree.add_sym(
            deco,
            SymbolKind::DefSymbol,
            Binding::Def(NodeId(4)),
            pos(),
            None,
        );
        tree.push_scope(RibKind::DefBody);
        tree.push_scope(RibKind::CondBody);
        assert!(tree.lookup_sym(deco, SymbolKind::DefSymbol).is_some());
    }

    #[test]
    fn test_edge_multiple_redeclarations_keep_only_the_last() {
        let mut tree: ScopeTree<u32> = ScopeTree::new();
        let name = Symbol::intern("x");
        for handle in 0..10u32 {
            tree.add_sym(name, SymbolKind::IdSymbol, Binding::Metric(handle), pos(), None);
        }
        let entry = tree.lookup_sym(name, SymbolKind::IdSymbol).unwrap();
        assert!(matches!(entry.binding, Binding::Metric(9)));
    }
}
