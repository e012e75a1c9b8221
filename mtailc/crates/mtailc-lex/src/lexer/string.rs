//! String and regex literal lexing.
//!
//! This module handles the two delimited-literal forms mtail source
//! contains: double-quoted strings (used for `as`-clause metric names and
//! string-typed `const` patterns) and `/.../`-delimited regular expressions.

use crate::token::TokenKind;
use crate::Lexer;
use mtailc_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// A newline or end of input reached before the closing `"` is an
    /// unterminated literal: it reports `Unterminated quoted string:
    /// "\"<captured>"` (captured text is the raw, undecoded source up to
    /// where lexing stopped) and yields `INVALID` rather than a partial
    /// `String` token.
    pub fn lex_string(&mut self) -> TokenKind {
        self.cursor.advance();
        let content_start = self.cursor.position();

        let mut content = String::new();
        let mut terminated = false;

        loop {
            if self.cursor.is_at_end() {
                break;
            }

            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                terminated = true;
                break;
            }

            if c == '\n' {
                break;
            }

            if c == '\\' {
                self.cursor.advance();
                if let Some(escaped) = self.parse_string_escape() {
                    content.push(escaped);
                }
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        if terminated {
            TokenKind::String(Symbol::intern(&content))
        } else {
            let raw = self.cursor.slice_from(content_start);
            self.report_error(format!("Unterminated quoted string: {:?}", format!("\"{}", raw)));
            TokenKind::Invalid
        }
    }

    /// Parses a string escape sequence (after the leading backslash has
    /// already been consumed).
    fn parse_string_escape(&mut self) -> Option<char> {
        if self.cursor.is_at_end() {
            self.report_error("unterminated escape sequence".to_string());
            return None;
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        match c {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '\\' => Some('\\'),
            '"' => Some('"'),
            _ => {
                self.report_error(format!("unknown escape sequence: \\{}", c));
                None
            },
        }
    }

    /// Lexes a `/.../`-delimited regular expression literal.
    ///
    /// A `\/` inside the pattern is an escaped delimiter and contributes a
    /// literal `/` to the pattern text; any other `\x` passes both
    /// characters through unchanged so regex escapes like `\d` or `\.`
    /// reach the regex engine intact.
    ///
    /// A newline or end of input reached before the closing `/` is an
    /// unterminated literal: it reports `Unterminated regular expression:
    /// "/<captured>"` (captured text is the raw, undecoded source up to
    /// where lexing stopped) and yields `INVALID` rather than a partial
    /// `Regex` token.
    pub fn lex_regex(&mut self) -> TokenKind {
        self.cursor.advance();
        let content_start = self.cursor.position();

        let mut pattern = String::new();
        let mut terminated = false;

        loop {
            if self.cursor.is_at_end() {
                break;
            }

            let c = self.cursor.current_char();

            if c == '/' {
                self.cursor.advance();
                terminated = true;
                break;
            }

            if c == '\n' {
                break;
            }

            if c == '\\' {
                self.cursor.advance();
                let next = self.cursor.current_char();
                if next == '/' {
                    pattern.push('/');
                } else {
                    pattern.push('\\');
                    pattern.push(next);
                }
                self.cursor.advance();
            } else {
                pattern.push(c);
                self.cursor.advance();
            }
        }

        if terminated {
            TokenKind::Regex(Symbol::intern(&pattern))
        } else {
            let raw = self.cursor.slice_from(content_start);
            self.report_error(format!("Unterminated regular expression: {:?}", format!("/{}", raw)));
            TokenKind::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtailc_util::Handler;

    fn lex_str(source: &str) -> TokenKind {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_string()
    }

    fn lex_rx(source: &str) -> TokenKind {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_regex()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_str("\"hello\""), TokenKind::String(Symbol::intern("hello")));
    }

    #[test]
    fn test_string_with_escape() {
        assert_eq!(
            lex_str("\"hello\\nworld\""),
            TokenKind::String(Symbol::intern("hello\nworld"))
        );
    }

    #[test]
    fn test_unterminated_string_reports_error() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("\"hello", &mut handler);
        let kind = lexer.lex_string();
        assert_eq!(kind, TokenKind::Invalid);
        let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert!(messages.iter().any(|m| m == "Unterminated quoted string: \"\\\"hello\""));
    }

    #[test]
    fn test_simple_regex() {
        assert_eq!(
            lex_rx("/[a-z]+/"),
            TokenKind::Regex(Symbol::intern("[a-z]+"))
        );
    }

    #[test]
    fn test_regex_with_escaped_delimiter() {
        assert_eq!(
            lex_rx(r"/a\/b/"),
            TokenKind::Regex(Symbol::intern("a/b"))
        );
    }

    #[test]
    fn test_regex_preserves_backslash_escapes() {
        assert_eq!(
            lex_rx(r"/\d+\.\d+/"),
            TokenKind::Regex(Symbol::intern(r"\d+\.\d+"))
        );
    }

    #[test]
    fn test_unterminated_regex_reports_error() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("/abc", &mut handler);
        let kind = lexer.lex_regex();
        assert_eq!(kind, TokenKind::Invalid);
        let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert!(messages.iter().any(|m| m == "Unterminated regular expression: \"/abc\""));
    }
}
