//! Edge case tests for mtailc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use mtailc_util::{Handler, Symbol};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = kinds("x");
        assert_eq!(t[0], TokenKind::Id(Symbol::intern("x")));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = kinds(&name);
        assert_eq!(t[0], TokenKind::Id(Symbol::intern(&name)));
    }

    #[test]
    fn test_edge_identifier_with_hyphens_and_digits() {
        let t = kinds("http-request-total-v2");
        assert_eq!(
            t[0],
            TokenKind::Id(Symbol::intern("http-request-total-v2"))
        );
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = kinds("counter gauge myvar");
        assert_eq!(t[0], TokenKind::Counter);
        assert_eq!(t[1], TokenKind::Gauge);
        assert_eq!(t[2], TokenKind::Id(Symbol::intern("myvar")));
    }

    #[test]
    fn test_edge_builtins_not_idents() {
        let t = kinds("strptime timestamp tolower len");
        assert_eq!(t[0], TokenKind::Builtin(Symbol::intern("strptime")));
        assert_eq!(t[1], TokenKind::Builtin(Symbol::intern("timestamp")));
        assert_eq!(t[2], TokenKind::Builtin(Symbol::intern("tolower")));
        assert_eq!(t[3], TokenKind::Builtin(Symbol::intern("len")));
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let t = kinds("\"\"");
        if let TokenKind::String(s) = &t[0] {
            assert_eq!(s.as_str(), "");
        } else {
            panic!("expected string token");
        }
    }

    #[test]
    fn test_edge_regex_containing_braces() {
        let t = kinds("/[a-z]{3,5}/");
        assert_eq!(t[0], TokenKind::Regex(Symbol::intern("[a-z]{3,5}")));
    }

    #[test]
    fn test_edge_all_relational_operators() {
        let t = kinds("< > <= >= == !=");
        assert_eq!(
            t,
            vec![
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::Eq,
                TokenKind::Ne,
            ]
        );
    }

    #[test]
    fn test_edge_all_delimiters() {
        let t = kinds("( ) { } [ ] ,");
        assert_eq!(
            t,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LCurly,
                TokenKind::RCurly,
                TokenKind::LSquare,
                TokenKind::RSquare,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(
            t.iter().filter(|k| **k == TokenKind::LParen).count(),
            3
        );
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = kinds("Counter counter");
        assert_eq!(t[0], TokenKind::Id(Symbol::intern("Counter")));
        assert_eq!(t[1], TokenKind::Counter);
    }

    #[test]
    fn test_edge_numbered_and_named_caprefs() {
        let t = kinds("$1 $2 $remote_addr");
        assert_eq!(t[0], TokenKind::Capref(Symbol::intern("1")));
        assert_eq!(t[1], TokenKind::Capref(Symbol::intern("2")));
        assert_eq!(t[2], TokenKind::Capref(Symbol::intern("remote_addr")));
    }

    #[test]
    fn test_edge_decorator_invocation() {
        let t = kinds("@common_log");
        assert_eq!(t[0], TokenKind::Deco(Symbol::intern("common_log")));
    }

    #[test]
    fn test_edge_plus_family() {
        let t = kinds("+ ++ +=");
        assert_eq!(
            t,
            vec![TokenKind::Plus, TokenKind::Inc, TokenKind::AddAssign]
        );
    }

    #[test]
    fn test_edge_max_i64() {
        let t = kinds("9223372036854775807");
        assert_eq!(t[0], TokenKind::Numeric(i64::MAX));
    }

    #[test]
    fn test_edge_all_keywords() {
        let t = kinds("counter gauge as by const hidden def next else");
        assert_eq!(
            t,
            vec![
                TokenKind::Counter,
                TokenKind::Gauge,
                TokenKind::As,
                TokenKind::By,
                TokenKind::Const,
                TokenKind::Hidden,
                TokenKind::Def,
                TokenKind::Next,
                TokenKind::Else,
            ]
        );
    }

    #[test]
    fn test_edge_hash_comment_consumes_to_end_of_line() {
        let t = kinds("counter foo # this is a comment\ngauge bar");
        assert_eq!(t[0], TokenKind::Counter);
        assert_eq!(t[1], TokenKind::Id(Symbol::intern("foo")));
        assert_eq!(t[2], TokenKind::Gauge);
        assert_eq!(t[3], TokenKind::Id(Symbol::intern("bar")));
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(kinds("007")[0], TokenKind::Numeric(7));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let mut h = Handler::new();
        let _ = Lexer::new("\"unterminated", &mut h).next_token();
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_unterminated_regex() {
        let mut h = Handler::new();
        let _ = Lexer::new("/unterminated", &mut h).next_token();
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_dangling_dollar() {
        let mut h = Handler::new();
        let t = Lexer::new("$ ", &mut h).next_token();
        assert!(t.is_invalid());
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_dangling_at() {
        let mut h = Handler::new();
        let t = Lexer::new("@ ", &mut h).next_token();
        assert!(t.is_invalid());
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_bare_bang() {
        let mut h = Handler::new();
        let t = Lexer::new("!", &mut h).next_token();
        assert!(t.is_invalid());
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_unknown_character_latches_invalid() {
        let mut h = Handler::new();
        let mut lex = Lexer::new("counter ` foo", &mut h);

        assert_eq!(lex.next_token().kind, TokenKind::Counter);
        let first = lex.next_token();
        assert!(first.is_invalid());

        // Once INVALID has been produced, every further call returns it
        // again rather than resuming and lexing `foo`.
        for _ in 0..3 {
            assert_eq!(lex.next_token().kind, TokenKind::Invalid);
        }
        assert!(h.has_errors());
    }

    #[test]
    fn test_err_invalid_token_terminates_the_iterator_stream() {
        let mut h = Handler::new();
        let lex = Lexer::new("counter ` foo", &mut h);
        let tokens: Vec<Token> = lex.collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Counter);
        assert!(tokens[1].is_invalid());
    }

    #[test]
    fn test_unterminated_regex_message_matches_captured_text() {
        let mut h = Handler::new();
        let _ = Lexer::new("/foo\n", &mut h).next_token();
        let messages: Vec<String> = h.diagnostics().into_iter().map(|d| d.message).collect();
        assert!(messages.iter().any(|m| m == "Unterminated regular expression: \"/foo\""));
    }

    #[test]
    fn test_unexpected_input_message_matches_spec_wording() {
        let mut h = Handler::new();
        let t = Lexer::new("?", &mut h).next_token();
        assert!(t.is_invalid());
        let messages: Vec<String> = h.diagnostics().into_iter().map(|d| d.message).collect();
        assert!(messages.iter().any(|m| m == "Unexpected input: '?'"));
    }
}
