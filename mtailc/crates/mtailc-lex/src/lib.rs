//! mtailc-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXICAL ANALYSIS THEORY
//! ============================================================================
//!
//! Lexical analysis is the first phase of compilation. It transforms a stream
//! of characters into a stream of tokens. This process is also called
//! "tokenization" or "scanning".
//!
//! FORMAL DEFINITION:
//! ------------------
//! Let Σ be the alphabet (set of all valid characters).
//! Let Σ* be the set of all strings over Σ.
//!
//! The lexer is a function:
//!   L: Σ* → T*
//! where T is the set of tokens.
//!
//! PROPERTIES:
//! -----------
//! - Linear time complexity: O(n) where n = input length
//! - Single-pass processing
//! - Context-free (doesn't consider surrounding tokens)
//!
//! LEXEME vs TOKEN:
//! ----------------
//! - Lexeme: the actual string of characters (e.g., "counter", "123", "=")
//! - Token: the abstract category + metadata (e.g., TokenKind::Counter, TokenKind::Numeric(123))
//!
//! ============================================================================
//! TOKEN CATEGORIES FOR THE MTAIL DSL
//! ============================================================================
//!
//! 1. KEYWORDS: counter, gauge, hidden, by, as, const, def, next, else
//! 2. IDENTIFIERS: [A-Za-z_][A-Za-z0-9_-]*
//! 3. BUILTINS: strptime, timestamp, tolower, len
//! 4. LITERALS: regex patterns (`/.../`), quoted strings, decimal numerics
//! 5. CAPTURE REFERENCES: `$1`, `$name`
//! 6. DECORATORS: `@name`
//! 7. OPERATORS: ++, -, +, <, >, <=, >=, ==, !=, +=, =
//! 8. PUNCTUATION: { } ( ) [ ] ,
//!
//! Whitespace and `#`-led line comments are skipped between tokens.

mod cursor;
mod lexer;
mod token;
mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
