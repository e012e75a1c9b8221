//! Decorator invocation lexing.
//!
//! A `@` introduces a reference to a `def`-declared decorator by name, used
//! at a decorator call site (`@my_decorator { ... }`).

use crate::token::TokenKind;
use crate::unicode::{is_ascii_ident_continue, is_ascii_ident_start};
use crate::Lexer;
use mtailc_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes a decorator invocation, `@name`.
    pub fn lex_decorator(&mut self) -> TokenKind {
        self.cursor.advance();

        let start = self.cursor.position();

        if !is_ascii_ident_start(self.cursor.current_char()) {
            self.report_error("expected a decorator name after '@'".to_string());
            return TokenKind::Invalid;
        }

        self.cursor.advance();
        while is_ascii_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        TokenKind::Deco(Symbol::intern(text))
    }
}
