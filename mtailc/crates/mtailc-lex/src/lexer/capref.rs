//! Capture-group reference lexing.
//!
//! A `$` introduces a reference to a regex capture group, either numbered
//! (`$1`) or named (`$name`), resolved against the capture groups of the
//! most recent `Regex` token in scope.

use crate::token::TokenKind;
use crate::unicode::{is_ascii_ident_continue, is_ascii_ident_start};
use crate::Lexer;
use mtailc_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes a capture-group reference, `$1` or `$name`.
    pub fn lex_capref(&mut self) -> TokenKind {
        self.cursor.advance();

        let start = self.cursor.position();

        if self.cursor.current_char().is_ascii_digit() {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        } else if is_ascii_ident_start(self.cursor.current_char()) {
            self.cursor.advance();
            while is_ascii_ident_continue(self.cursor.current_char()) {
                self.cursor.advance();
            }
        } else {
            self.report_error("invalid capture group reference: expected a number or name after '$'".to_string());
            return TokenKind::Invalid;
        }

        let text = self.cursor.slice_from(start);
        TokenKind::Capref(Symbol::intern(text))
    }
}
