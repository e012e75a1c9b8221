//! mtailc-par - parser and AST builder for mtail programs.
//!
//! A hand-written recursive-descent parser with Pratt-style precedence
//! climbing for the expression grammar. Unlike a conventional two-pass
//! front end, semantic actions run inline as each construct is recognized:
//! a `Decl` asks the supplied [`MetricFactory`] for a metric handle and
//! registers its `IdSymbol` the moment the declaration is parsed; a `Cond`'s
//! regex pattern is compiled and its capture groups registered as
//! `CaprefSymbol`s before the body that might reference them is parsed.
//! There is no separate resolution pass to drive.
//!
//! ```text
//! program    := { stmt }
//! stmt       := cond | decl | hide | def | deco | const_decl | next | expr
//! cond       := pattern stmtlist [ ELSE stmtlist ]
//! pattern    := REGEX { '+' ( REGEX | ID ) } | expr relop expr | expr
//! stmtlist   := LCURLY { stmt } RCURLY
//! decl       := ( COUNTER | GAUGE ) declarator [ by_spec ] [ as_spec ]
//! hide       := HIDDEN decl
//! declarator := name
//! by_spec    := BY name { COMMA name }
//! as_spec    := AS STRING
//! const_decl := CONST name pattern
//! def        := DEF name stmtlist
//! deco       := DECO stmtlist
//! name       := ID
//! expr       := assign
//! assign     := rel [ (ASSIGN | ADD_ASSIGN) rel ] | postfix INC
//! rel        := additive [ relop additive ]
//! relop      := LT | GT | LE | GE | EQ | NE
//! additive   := unary { (PLUS | MINUS) unary }
//! unary      := postfix
//! postfix    := primary { LSQUARE expr RSQUARE }
//! primary    := ID | CAPREF | STRING | NUMERIC | BUILTIN arg_list
//!             | LPAREN expr RPAREN
//! arg_list   := LPAREN [ expr { COMMA expr } ] RPAREN
//! ```
//!
//! `pattern`'s `'+' (REGEX | ID)` concatenates literal regex text; an `ID`
//! term is resolved against the `const` table built up as earlier statements
//! are parsed, so `const` patterns may themselves reference earlier `const`s.

mod ast;
mod expr;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;

use std::collections::HashMap;

use mtailc_lex::{Lexer, Token, TokenKind};
use mtailc_sem::{MetricFactory, MetricStore, ScopeTree};
use mtailc_util::{DiagnosticBuilder, Handler, Span, Symbol};

/// Drives lexing, scope/symbol resolution, and AST construction for one
/// mtail program.
pub struct Parser<'a, F>
where
    F: MetricFactory,
    F: MetricStore<<F as MetricFactory>::Metric>,
{
    tokens: Vec<Token>,
    position: usize,
    handler: &'a mut Handler,
    program_name: String,
    factory: F,
    scopes: ScopeTree<F::Metric>,
    /// Resolved text of each `const` pattern, keyed by name. Substitution
    /// happens eagerly here at definition time, so later `const`s may
    /// reference earlier ones but a pattern never needs re-expanding once
    /// compiled into a `Regex` node.
    consts: HashMap<Symbol, String>,
    ast: Ast<F::Metric>,
}

impl<'a, F> Parser<'a, F>
where
    F: MetricFactory,
    F: MetricStore<<F as MetricFactory>::Metric>,
{
    pub fn new(source: &str, handler: &'a mut Handler, program_name: impl Into<String>, factory: F) -> Self {
        let mut lex_handler = Handler::new();
        let tokens: Vec<Token> = Lexer::new(source, &mut lex_handler).collect();
        for diagnostic in lex_handler.diagnostics() {
            handler.emit_diagnostic(diagnostic);
        }

        Self {
            tokens,
            position: 0,
            handler,
            program_name: program_name.into(),
            factory,
            scopes: ScopeTree::new(),
            consts: HashMap::new(),
            ast: Ast::new(),
        }
    }

    /// Parses the whole token stream into an [`Ast`], recovering from
    /// statement-level errors so that a single bad line does not stop the
    /// rest of the program from being checked. Returns the factory back to
    /// the caller alongside the AST, since it is the only handle to whatever
    /// metrics got registered along the way.
    pub fn parse(mut self) -> (Ast<F::Metric>, F) {
        let mut children = Vec::new();
        while !self.at_eof() {
            match self.parse_stmt() {
                Some(stmt::StmtOutcome::Node(id)) => children.push(id),
                Some(stmt::StmtOutcome::Skip) => {}
                None => self.synchronize(),
            }
        }
        let root = self.ast.push(Node::StmtList(StmtList { children }));
        self.ast.root = root;
        (self.ast, self.factory)
    }

    // ---- token stream helpers -------------------------------------------------

    fn implicit_eof() -> Token {
        Token::new(TokenKind::Eof, Span::DUMMY)
    }

    fn current(&self) -> Token {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or_else(Self::implicit_eof)
    }

    fn kind(&self) -> TokenKind {
        self.current().kind
    }

    fn span(&self) -> Span {
        self.current().span
    }

    fn at_eof(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn advance(&mut self) -> Token {
        let tok = self.current();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        tok
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Looks ahead `offset` tokens without consuming, treating a lookahead
    /// past the end of the stream as `EOF`.
    fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.position + offset)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Option<Span> {
        if self.check(kind) {
            Some(self.advance().span)
        } else {
            self.error(format!("expected {}", what));
            None
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        DiagnosticBuilder::error(message).span(self.span()).emit(self.handler);
    }

    /// Skips tokens until a point a new statement can plausibly start from,
    /// so one malformed statement does not cascade into spurious errors for
    /// the rest of the program.
    fn synchronize(&mut self) {
        if self.at_eof() {
            return;
        }
        self.advance();
        while !self.at_eof() {
            if matches!(
                self.kind(),
                TokenKind::Counter
                    | TokenKind::Gauge
                    | TokenKind::Hidden
                    | TokenKind::Const
                    | TokenKind::Def
                    | TokenKind::Next
                    | TokenKind::RCurly
            ) {
                return;
            }
            self.advance();
        }
    }
}
