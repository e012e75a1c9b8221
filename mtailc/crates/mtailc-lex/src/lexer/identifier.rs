//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::is_ascii_ident_continue;
use crate::Lexer;
use mtailc_util::Symbol;

/// mtail identifiers continue with letters, digits, underscore, or hyphen.
/// The hyphen is what distinguishes this from a general-purpose language's
/// identifier grammar: metric names like `my-metric-name` are common in the
/// wild and the lexer accepts them directly rather than requiring quoting.
fn is_mtail_ident_continue(c: char) -> bool {
    is_ascii_ident_continue(c) || c == '-'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters, underscores, or hyphens. After reading the
    /// identifier, checks whether it matches a reserved keyword.
    pub fn lex_identifier(&mut self) -> TokenKind {
        while is_mtail_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        if let Some(kw) = keyword_from_ident(text) {
            return kw;
        }

        if Symbol::is_builtin_name(text) {
            return TokenKind::Builtin(Symbol::intern_known(text));
        }

        TokenKind::Id(Symbol::intern(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtailc_util::Handler;

    fn lex_ident(source: &str) -> TokenKind {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token, TokenKind::Id(Symbol::intern("foo")));
    }

    #[test]
    fn test_identifier_with_underscore() {
        let token = lex_ident("foo_bar_123");
        assert_eq!(token, TokenKind::Id(Symbol::intern("foo_bar_123")));
    }

    #[test]
    fn test_identifier_with_hyphen() {
        let token = lex_ident("my-metric-name");
        assert_eq!(token, TokenKind::Id(Symbol::intern("my-metric-name")));
    }

    #[test]
    fn test_keyword_counter() {
        assert_eq!(lex_ident("counter"), TokenKind::Counter);
    }

    #[test]
    fn test_keyword_gauge() {
        assert_eq!(lex_ident("gauge"), TokenKind::Gauge);
    }

    #[test]
    fn test_keyword_hidden() {
        assert_eq!(lex_ident("hidden"), TokenKind::Hidden);
    }

    #[test]
    fn test_keyword_by() {
        assert_eq!(lex_ident("by"), TokenKind::By);
    }

    #[test]
    fn test_keyword_as() {
        assert_eq!(lex_ident("as"), TokenKind::As);
    }

    #[test]
    fn test_keyword_const() {
        assert_eq!(lex_ident("const"), TokenKind::Const);
    }

    #[test]
    fn test_keyword_def() {
        assert_eq!(lex_ident("def"), TokenKind::Def);
    }

    #[test]
    fn test_keyword_next() {
        assert_eq!(lex_ident("next"), TokenKind::Next);
    }

    #[test]
    fn test_keyword_else() {
        assert_eq!(lex_ident("else"), TokenKind::Else);
    }

    #[test]
    fn test_builtin_strptime() {
        assert_eq!(
            lex_ident("strptime"),
            TokenKind::Builtin(Symbol::intern("strptime"))
        );
    }

    #[test]
    fn test_builtin_len() {
        assert_eq!(lex_ident("len"), TokenKind::Builtin(Symbol::intern("len")));
    }
}
