//! Numeric literal lexing.
//!
//! mtail numeric literals are plain decimal integers: durations, byte
//! thresholds, and `by`-clause bucket boundaries. There is no hex, octal,
//! binary, or floating-point form in the grammar.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal.
    pub fn lex_number(&mut self) -> TokenKind {
        let start = self.cursor.position();

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        match text.parse::<i64>() {
            Ok(value) => TokenKind::Numeric(value),
            Err(e) => {
                self.report_error(format!("integer literal '{}' out of range: {}", text, e));
                TokenKind::Numeric(0)
            },
        }
    }
}
