//! mtailc-par - AST node definitions.
//!
//! The AST is an arena: every node lives in `Ast::nodes`, addressed by
//! `NodeId`. This sidesteps the only cyclic reference in the tree - a
//! `Capref` resolves to the `Regex` node whose capture groups it indexes,
//! while that same `Regex` sits as an ordinary child further up the tree -
//! by storing both ends as plain integer handles instead of owned pointers.

use mtailc_sem::{NodeId, SymbolEntry};
use mtailc_util::{Span, Symbol};

/// A parsed program: every node reachable from `root`, plus any declarations
/// whose scope has already closed but whose symbols are still referenced
/// from deeper in the tree.
#[derive(Debug)]
pub struct Ast<M> {
    pub nodes: Vec<Node<M>>,
    pub root: NodeId,
}

impl<M> Ast<M> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
        }
    }

    pub fn push(&mut self, node: Node<M>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node<M> {
        &self.nodes[id.0 as usize]
    }
}

impl<M> Default for Ast<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Relational operators, `pattern relop pattern` and `expr relop expr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

/// Additive operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Plus,
    Minus,
}

/// One node of a parsed mtail program.
#[derive(Debug)]
pub enum Node<M> {
    /// A sequence of statements sharing one scope: a program body, a `Cond`
    /// body, an `else` body, or a `def`/`deco` body.
    StmtList(StmtList),
    /// `pattern stmtlist [ELSE stmtlist]`.
    Cond(Cond),
    /// A regular expression literal, compiled eagerly at parse time.
    Regex(RegexNode),
    /// `expr relop expr`.
    Rel(Rel),
    /// `expr (PLUS | MINUS) expr`.
    Additive(Additive),
    /// `lvalue ASSIGN rvalue`.
    AssignExpr(AssignExpr),
    /// `lvalue ADD_ASSIGN rvalue`.
    IncByExpr(IncByExpr),
    /// `lvalue INC`.
    IncExpr(IncExpr),
    /// `base LSQUARE index RSQUARE`, one level of a `by`-keyed metric
    /// access; nested for multiple keys.
    Indexed(Indexed),
    /// A builtin function call, `strptime(...)`.
    Builtin(Builtin),
    /// A comma-separated argument list.
    ExprList(ExprList),
    /// A plain identifier reference.
    Id(IdNode<M>),
    /// A capture group reference, `$0`, `$1`, or `$name`.
    Capref(CaprefNode<M>),
    /// A string literal.
    StringLit(StringLit),
    /// An integer literal.
    NumericLit(NumericLit),
    /// A `counter`/`gauge` declaration, optionally `hidden`.
    Decl(Decl<M>),
    /// `def name { ... }`.
    Def(Def<M>),
    /// `@name { ... }`.
    Deco(Deco),
    /// `next`, inside a decorator body: continue into the decorated block.
    Next(Next),
}

#[derive(Debug)]
pub struct StmtList {
    pub children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct Cond {
    pub condition: NodeId,
    pub body: NodeId,
    pub else_body: Option<NodeId>,
}

#[derive(Debug)]
pub struct RegexNode {
    pub pattern: Symbol,
    pub compiled: regex::Regex,
    pub span: Span,
}

#[derive(Debug)]
pub struct Rel {
    pub lhs: NodeId,
    pub op: RelOp,
    pub rhs: NodeId,
}

#[derive(Debug)]
pub struct Additive {
    pub lhs: NodeId,
    pub op: AddOp,
    pub rhs: NodeId,
}

#[derive(Debug)]
pub struct AssignExpr {
    pub lvalue: NodeId,
    pub rvalue: NodeId,
}

#[derive(Debug)]
pub struct IncByExpr {
    pub lvalue: NodeId,
    pub rvalue: NodeId,
}

#[derive(Debug)]
pub struct IncExpr {
    pub operand: NodeId,
}

#[derive(Debug)]
pub struct Indexed {
    pub base: NodeId,
    pub index: NodeId,
}

#[derive(Debug)]
pub struct Builtin {
    pub name: Symbol,
    pub args: Vec<NodeId>,
    pub span: Span,
}

#[derive(Debug)]
pub struct ExprList {
    pub children: Vec<NodeId>,
}

#[derive(Debug)]
pub struct IdNode<M> {
    pub name: Symbol,
    pub symbol: Option<SymbolEntry<M>>,
    pub span: Span,
}

#[derive(Debug)]
pub struct CaprefNode<M> {
    pub name: Symbol,
    pub symbol: Option<SymbolEntry<M>>,
    pub span: Span,
}

#[derive(Debug)]
pub struct StringLit {
    pub value: Symbol,
}

#[derive(Debug)]
pub struct NumericLit {
    pub value: i64,
}

#[derive(Debug)]
pub struct Decl<M> {
    pub kind: mtailc_sem::MetricKind,
    pub name: Symbol,
    pub export_name: Option<Symbol>,
    pub keys: Vec<Symbol>,
    pub hidden: bool,
    pub symbol: Option<SymbolEntry<M>>,
    pub metric: Option<M>,
    pub span: Span,
}

#[derive(Debug)]
pub struct Def<M> {
    pub name: Symbol,
    pub body: NodeId,
    pub symbol: Option<SymbolEntry<M>>,
    pub span: Span,
}

#[derive(Debug)]
pub struct Deco {
    pub name: Symbol,
    pub body: NodeId,
    pub target: Option<NodeId>,
    pub span: Span,
}

#[derive(Debug)]
pub struct Next {
    pub span: Span,
}
