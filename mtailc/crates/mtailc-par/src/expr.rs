//! Expression parsing: `assign`, `rel`, `additive`, `postfix`, `primary`.
//!
//! mtail's expression grammar has no unary minus and no multiplicative
//! operators - the only arithmetic a program does is incrementing or
//! adding to a metric. Precedence climbing here is correspondingly shallow:
//! `additive` is the only level with a binary operator loop, everything
//! above it (`assign`, `rel`) takes at most one operator.

use mtailc_lex::TokenKind;
use mtailc_sem::{MetricFactory, MetricStore};

use crate::{AddOp, Additive, AssignExpr, Builtin, IdNode, IncByExpr, IncExpr, Indexed, Node, NumericLit, Rel, RelOp, StringLit};

impl<'a, F> crate::Parser<'a, F>
where
    F: MetricFactory,
    F: MetricStore<<F as MetricFactory>::Metric>,
{
    pub(crate) fn parse_expr(&mut self) -> Option<crate::NodeId> {
        self.parse_assign()
    }

    pub(crate) fn parse_assign(&mut self) -> Option<crate::NodeId> {
        let lvalue = self.parse_rel()?;

        if self.eat(TokenKind::Assign) {
            let rvalue = self.parse_rel()?;
            return Some(self.ast.push(Node::AssignExpr(AssignExpr { lvalue, rvalue })));
        }
        if self.eat(TokenKind::AddAssign) {
            let rvalue = self.parse_rel()?;
            return Some(self.ast.push(Node::IncByExpr(IncByExpr { lvalue, rvalue })));
        }
        if self.eat(TokenKind::Inc) {
            return Some(self.ast.push(Node::IncExpr(IncExpr { operand: lvalue })));
        }
        Some(lvalue)
    }

    pub(crate) fn parse_rel(&mut self) -> Option<crate::NodeId> {
        let lhs = self.parse_additive()?;
        let op = match self.kind() {
            TokenKind::Lt => RelOp::Lt,
            TokenKind::Gt => RelOp::Gt,
            TokenKind::Le => RelOp::Le,
            TokenKind::Ge => RelOp::Ge,
            TokenKind::Eq => RelOp::Eq,
            TokenKind::Ne => RelOp::Ne,
            _ => return Some(lhs),
        };
        self.advance();
        let rhs = self.parse_additive()?;
        Some(self.ast.push(Node::Rel(Rel { lhs, op, rhs })))
    }

    pub(crate) fn parse_additive(&mut self) -> Option<crate::NodeId> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.kind() {
                TokenKind::Plus => AddOp::Plus,
                TokenKind::Minus => AddOp::Minus,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = self.ast.push(Node::Additive(Additive { lhs, op, rhs }));
        }
        Some(lhs)
    }

    pub(crate) fn parse_unary(&mut self) -> Option<crate::NodeId> {
        self.parse_postfix()
    }

    pub(crate) fn parse_postfix(&mut self) -> Option<crate::NodeId> {
        let mut base = self.parse_primary()?;
        while self.eat(TokenKind::LSquare) {
            let index = self.parse_expr()?;
            self.expect(TokenKind::RSquare, "']'")?;
            base = self.ast.push(Node::Indexed(Indexed { base, index }));
        }
        Some(base)
    }

    pub(crate) fn parse_primary(&mut self) -> Option<crate::NodeId> {
        let span = self.span();
        match self.kind() {
            TokenKind::Id(name) => {
                self.advance();
                let symbol = self.scopes.lookup_sym(name, mtailc_sem::SymbolKind::IdSymbol).cloned();
                if symbol.is_none() {
                    self.error(format!("Identifier '{}' not declared.", name.as_str()));
                }
                Some(self.ast.push(Node::Id(IdNode { name, symbol, span })))
            }
            TokenKind::Capref(name) => {
                self.advance();
                let symbol = self.scopes.lookup_sym(name, mtailc_sem::SymbolKind::CaprefSymbol).cloned();
                if symbol.is_none() {
                    self.error(format!(
                        "Capture group ${} not defined by prior regular expression in this or an outer scope",
                        name.as_str()
                    ));
                }
                Some(self.ast.push(Node::Capref(crate::CaprefNode { name, symbol, span })))
            }
            TokenKind::String(value) => {
                self.advance();
                Some(self.ast.push(Node::StringLit(StringLit { value })))
            }
            TokenKind::Numeric(value) => {
                self.advance();
                Some(self.ast.push(Node::NumericLit(NumericLit { value })))
            }
            TokenKind::Builtin(name) => {
                self.advance();
                let args = if self.check(TokenKind::LParen) {
                    self.parse_arg_list()?
                } else {
                    Vec::new()
                };
                Some(self.ast.push(Node::Builtin(Builtin { name, args, span })))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Some(inner)
            }
            _ => {
                self.error("expected an expression");
                None
            }
        }
    }

    pub(crate) fn parse_arg_list(&mut self) -> Option<Vec<crate::NodeId>> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while self.eat(TokenKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Some(args)
    }
}
