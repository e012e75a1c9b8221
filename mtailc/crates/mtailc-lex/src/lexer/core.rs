//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use mtailc_util::{DiagnosticBuilder, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the mtail DSL.
///
/// The lexer transforms source text into a stream of tokens. It skips
/// whitespace and `#`-led comments, then dispatches to the family-specific
/// lexing method for the current character.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub bom_checked: bool,

    /// Once an `EOF` or `INVALID` has been produced, this holds that kind so
    /// every later call keeps returning the same sentinel rather than
    /// resuming normal lexing.
    latched: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
            latched: None,
        }
    }

    /// Returns the next token from the source text.
    ///
    /// Skips whitespace and comments, then dispatches to the appropriate
    /// lexing method based on the current character. Once an `EOF` or
    /// `INVALID` has been produced, every further call returns that same
    /// sentinel without consuming any more input.
    pub fn next_token(&mut self) -> Token {
        if let Some(kind) = self.latched {
            let span = Span::new(
                self.cursor.position(),
                self.cursor.position(),
                self.cursor.line(),
                self.cursor.column(),
            );
            return Token::new(kind, span);
        }

        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = if self.cursor.is_at_end() {
            TokenKind::Eof
        } else {
            match self.cursor.current_char() {
                '(' => {
                    self.cursor.advance();
                    TokenKind::LParen
                },
                ')' => {
                    self.cursor.advance();
                    TokenKind::RParen
                },
                '{' => {
                    self.cursor.advance();
                    TokenKind::LCurly
                },
                '}' => {
                    self.cursor.advance();
                    TokenKind::RCurly
                },
                '[' => {
                    self.cursor.advance();
                    TokenKind::LSquare
                },
                ']' => {
                    self.cursor.advance();
                    TokenKind::RSquare
                },
                ',' => {
                    self.cursor.advance();
                    TokenKind::Comma
                },
                '+' => self.lex_plus(),
                '-' => self.lex_minus(),
                '=' => self.lex_equals(),
                '!' => self.lex_bang(),
                '<' => self.lex_less(),
                '>' => self.lex_greater(),
                '"' => self.lex_string(),
                '/' => self.lex_regex(),
                '$' => self.lex_capref(),
                '@' => self.lex_decorator(),
                c if crate::unicode::is_ascii_ident_start(c) => self.lex_identifier(),
                c if c.is_ascii_digit() => self.lex_number(),
                c => {
                    self.report_error(format!("Unexpected input: '{}'", c));
                    self.cursor.advance();
                    TokenKind::Invalid
                },
            }
        };

        if matches!(kind, TokenKind::Invalid | TokenKind::Eof) {
            self.latched = Some(kind);
        }

        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, span)
    }

    /// Reports a lexical error at the current token position.
    pub fn report_error(&mut self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message)
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the current token.
    pub fn token_start(&mut self) -> usize {
        self.token_start
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields tokens up to and including the first `INVALID`, or up to but
    /// excluding the terminating `EOF`; either way the lexer is already
    /// latched by the time this returns, so a later call is guaranteed to
    /// return `None` without re-scanning.
    fn next(&mut self) -> Option<Self::Item> {
        if self.latched.is_some() {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
