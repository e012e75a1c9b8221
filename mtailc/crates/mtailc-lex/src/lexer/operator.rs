//! Operator and punctuation lexing.
//!
//! mtail's operator set is small: increment, addition/subtraction (used for
//! incrementing a metric and as a timestamp delta), assignment, add-assign,
//! and the relational operators used in `Cond` expressions. There is no
//! multiplication, division, or bitwise family, and no standalone logical
//! negation operator.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes plus, increment, or add-assign.
    ///
    /// Handles: `+`, `++`, `+=`
    pub fn lex_plus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('+') {
            TokenKind::Inc
        } else if self.cursor.match_char('=') {
            TokenKind::AddAssign
        } else {
            TokenKind::Plus
        }
    }

    /// Lexes minus.
    ///
    /// Handles: `-`
    pub fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Minus
    }

    /// Lexes assign or equality.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Eq
        } else {
            TokenKind::Assign
        }
    }

    /// Lexes not-equals.
    ///
    /// Handles: `!=`. A bare `!` is not a valid token in this grammar.
    pub fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Ne
        } else {
            self.report_error("expected '=' after '!'".to_string());
            TokenKind::Invalid
        }
    }

    /// Lexes less-than or less-or-equal.
    ///
    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Le
        } else {
            TokenKind::Lt
        }
    }

    /// Lexes greater-than or greater-or-equal.
    ///
    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Ge
        } else {
            TokenKind::Gt
        }
    }
}
