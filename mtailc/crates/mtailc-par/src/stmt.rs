//! Statement parsing: declarations, `cond`, `def`/`deco`, `const`, `next`.
//!
//! Every statement that introduces a symbol registers it in the current
//! scope the moment it is parsed, so later statements in the same or a
//! nested scope can already resolve it - there is no separate pass that
//! walks the finished tree looking for bindings.

use mtailc_lex::TokenKind;
use mtailc_sem::{Binding, MetricFactory, MetricKind, MetricStore, RibKind, SymbolKind};
use mtailc_util::Symbol;

use crate::{Cond, Decl, Def, Deco, Next, Node, StmtList};

/// What parsing one statement produced. A `const` declaration resolves its
/// pattern text and registers it for later substitution but contributes no
/// node to the enclosing statement list.
pub(crate) enum StmtOutcome {
    Node(crate::NodeId),
    Skip,
}

impl<'a, F> crate::Parser<'a, F>
where
    F: MetricFactory,
    F: MetricStore<<F as MetricFactory>::Metric>,
{
    pub(crate) fn parse_stmt(&mut self) -> Option<StmtOutcome> {
        match self.kind() {
            TokenKind::Counter | TokenKind::Gauge => self.parse_decl(false),
            TokenKind::Hidden => self.parse_hide(),
            TokenKind::Const => self.parse_const_decl(),
            TokenKind::Def => self.parse_def(),
            TokenKind::Deco(_) => self.parse_deco(),
            TokenKind::Next => self.parse_next(),
            _ => self.parse_cond_or_expr(),
        }
    }

    fn parse_cond_or_expr(&mut self) -> Option<StmtOutcome> {
        let condition = self.parse_pattern()?;
        if self.check(TokenKind::LCurly) {
            let body = self.parse_stmtlist(RibKind::CondBody)?;
            let else_body = if self.eat(TokenKind::Else) {
                Some(self.parse_stmtlist(RibKind::CondElse)?)
            } else {
                None
            };
            let node = self.ast.push(Node::Cond(Cond { condition, body, else_body }));
            Some(StmtOutcome::Node(node))
        } else {
            Some(StmtOutcome::Node(condition))
        }
    }

    fn parse_pattern(&mut self) -> Option<crate::NodeId> {
        match self.kind() {
            TokenKind::Regex(_) => self.parse_regex_literal(),
            _ => self.parse_expr(),
        }
    }

    /// Compiles a `pattern := REGEX ( '+' ( REGEX | ID ) )*` literal and
    /// registers its capture groups: `$0` for the whole match, then for each
    /// group both its positional name and (if present) its real name, all
    /// bound to this node with `addr` equal to the group's index.
    fn parse_regex_literal(&mut self) -> Option<crate::NodeId> {
        let span = self.span();
        let text = self.parse_pattern_text()?;
        self.compile_pattern(&text, span)
    }

    /// Consumes a leading `REGEX` and any trailing `'+' (REGEX | ID)` terms,
    /// concatenating their text. An `ID` term is resolved against
    /// `constPatterns`; a miss reports `Constant '<id>' not defined.` and
    /// contributes nothing (an empty string is substituted).
    fn parse_pattern_text(&mut self) -> Option<String> {
        let mut text = match self.kind() {
            TokenKind::Regex(s) => {
                self.advance();
                s.as_str().to_string()
            }
            _ => {
                self.error("expected a regular expression");
                return None;
            }
        };

        while self.check(TokenKind::Plus) && matches!(self.peek_kind(1), TokenKind::Regex(_) | TokenKind::Id(_)) {
            self.advance(); // '+'
            match self.kind() {
                TokenKind::Regex(s) => {
                    self.advance();
                    text.push_str(s.as_str());
                }
                TokenKind::Id(const_name) => {
                    self.advance();
                    match self.consts.get(&const_name) {
                        Some(resolved) => text.push_str(resolved),
                        None => self.error(format!("Constant '{}' not defined.", const_name.as_str())),
                    }
                }
                _ => unreachable!("loop condition guards on Regex or Id"),
            }
        }

        Some(text)
    }

    /// Compiles concatenated pattern text into a `Regex` AST node and
    /// registers its capture groups in the current scope.
    fn compile_pattern(&mut self, text: &str, span: mtailc_util::Span) -> Option<crate::NodeId> {
        let compiled = match regex::Regex::new(text) {
            Ok(re) => re,
            Err(err) => {
                self.error(format!("invalid regular expression: {}", err));
                regex::Regex::new("").expect("empty pattern always compiles")
            }
        };

        let node = self.ast.push(Node::Regex(crate::RegexNode {
            pattern: Symbol::intern(text),
            compiled: compiled.clone(),
            span,
        }));

        self.scopes
            .add_sym(Symbol::intern("0"), SymbolKind::CaprefSymbol, Binding::Regex(node), span, Some(0));
        // Capture group zero is the whole match, so the numbered symbol for
        // group `i` is addressed `i - 1`; the same group's named symbol (if
        // any) keeps `addr = i`. Preserved from mtail's own addressing, which
        // is inconsistent between the two but not a bug we get to silently fix.
        for (i, name) in compiled.capture_names().enumerate() {
            if i == 0 {
                continue;
            }
            let positional = Symbol::intern(&i.to_string());
            self.scopes
                .add_sym(positional, SymbolKind::CaprefSymbol, Binding::Regex(node), span, Some(i - 1));
            if let Some(named) = name {
                self.scopes.add_sym(Symbol::intern(named), SymbolKind::CaprefSymbol, Binding::Regex(node), span, Some(i));
            }
        }

        Some(node)
    }

    /// `const ID pattern` - the pattern's resolved text is stored in
    /// `constPatterns[ID]` eagerly, so a later `const` may itself reference
    /// an earlier one by name. Contributes no AST node to the enclosing
    /// statement list.
    fn parse_const_decl(&mut self) -> Option<StmtOutcome> {
        self.advance(); // CONST
        let (name, _) = self.parse_name()?;
        let text = self.parse_pattern_text()?;
        self.consts.insert(name, text);
        Some(StmtOutcome::Skip)
    }

    fn parse_name(&mut self) -> Option<(Symbol, mtailc_util::Span)> {
        let span = self.span();
        match self.kind() {
            TokenKind::Id(name) => {
                self.advance();
                Some((name, span))
            }
            _ => {
                self.error("expected an identifier");
                None
            }
        }
    }

    fn parse_hide(&mut self) -> Option<StmtOutcome> {
        self.advance(); // HIDDEN
        self.parse_decl(true)
    }

    fn parse_decl(&mut self, hidden: bool) -> Option<StmtOutcome> {
        let span = self.span();
        let kind = match self.kind() {
            TokenKind::Counter => {
                self.advance();
                MetricKind::Counter
            }
            TokenKind::Gauge => {
                self.advance();
                MetricKind::Gauge
            }
            _ => {
                self.error("expected 'counter' or 'gauge'");
                return None;
            }
        };
        let (name, _) = self.parse_name()?;

        let mut keys = Vec::new();
        if self.eat(TokenKind::By) {
            let (first, _) = self.parse_name()?;
            keys.push(first);
            while self.eat(TokenKind::Comma) {
                let (k, _) = self.parse_name()?;
                keys.push(k);
            }
            keys.sort_by_key(|k| k.as_str());
        }

        let export_name = if self.eat(TokenKind::As) {
            match self.kind() {
                TokenKind::String(s) => {
                    self.advance();
                    Some(s)
                }
                _ => {
                    self.error("expected a string after 'as'");
                    None
                }
            }
        } else {
            None
        };

        let key_strs: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();
        let program_name = self.program_name.clone();
        let metric = self.factory.new_metric(name.as_str(), &program_name, kind, &key_strs, hidden);
        if !hidden {
            self.factory.add(metric.clone());
        }
        let symbol = self.scopes.add_sym(name, SymbolKind::IdSymbol, Binding::Metric(metric.clone()), span, None);

        let node = self.ast.push(Node::Decl(Decl {
            kind,
            name,
            export_name,
            keys,
            hidden,
            symbol: Some(symbol),
            metric: Some(metric),
            span,
        }));
        Some(StmtOutcome::Node(node))
    }

    fn parse_def(&mut self) -> Option<StmtOutcome> {
        let span = self.span();
        self.advance(); // DEF
        let (name, _) = self.parse_name()?;
        let body = self.parse_stmtlist(RibKind::DefBody)?;

        let node = self.ast.push(Node::Def(Def { name, body, symbol: None, span }));
        let symbol = self.scopes.add_sym(name, SymbolKind::DefSymbol, Binding::Def(node), span, None);
        if let Node::Def(def) = &mut self.ast.nodes[node.0 as usize] {
            def.symbol = Some(symbol);
        }
        Some(StmtOutcome::Node(node))
    }

    fn parse_deco(&mut self) -> Option<StmtOutcome> {
        let span = self.span();
        let name = match self.kind() {
            TokenKind::Deco(name) => {
                self.advance();
                name
            }
            _ => {
                self.error("expected a decorator invocation");
                return None;
            }
        };

        let target = self.scopes.lookup_sym(name, SymbolKind::DefSymbol).cloned();
        if target.is_none() {
            self.error(format!("Decorator {} not defined", name.as_str()));
        }
        let target_node = target.and_then(|entry| match entry.binding {
            Binding::Def(id) => Some(id),
            _ => None,
        });

        let body = self.parse_stmtlist(RibKind::DecoBody)?;
        let node = self.ast.push(Node::Deco(Deco { name, body, target: target_node, span }));
        Some(StmtOutcome::Node(node))
    }

    fn parse_next(&mut self) -> Option<StmtOutcome> {
        let span = self.span();
        self.advance(); // NEXT
        Some(StmtOutcome::Node(self.ast.push(Node::Next(Next { span }))))
    }

    /// `LCURLY { stmt } RCURLY`, pushing and popping one scope of `kind`.
    pub(crate) fn parse_stmtlist(&mut self, kind: RibKind) -> Option<crate::NodeId> {
        self.expect(TokenKind::LCurly, "'{'")?;
        self.scopes.push_scope(kind);

        let mut children = Vec::new();
        while !self.check(TokenKind::RCurly) && !self.at_eof() {
            match self.parse_stmt() {
                Some(StmtOutcome::Node(id)) => children.push(id),
                Some(StmtOutcome::Skip) => {}
                None => self.synchronize(),
            }
        }

        self.scopes.pop_scope();
        self.expect(TokenKind::RCurly, "'}'")?;
        Some(self.ast.push(Node::StmtList(StmtList { children })))
    }
}
