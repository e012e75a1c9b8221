//! Token kinds produced by the lexer.
//!
//! mtail's grammar needs only a flat, closed set of token kinds: metric
//! declaration keywords, the small builtin-function vocabulary, literal
//! forms (regex, string, numeric), the two name-referring forms (plain
//! identifier and capture-group reference), decorator invocations, and the
//! operator/punctuation set the grammar actually uses.

use mtailc_util::span::Span;
use mtailc_util::symbol::Symbol;

/// The category of a lexed token.
///
/// Keywords and punctuation carry no payload; they are fully described by
/// their kind. `Builtin`, `Id`, `Capref`, and `Deco` carry the interned name
/// text as a [`Symbol`]. `Regex` and `String` carry the decoded literal
/// text. `Numeric` carries the parsed integer value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Lexical error; `text` on the owning [`Token`] holds a diagnostic message.
    Invalid,
    /// End of input.
    Eof,

    // Metric declaration keywords.
    Counter,
    Gauge,
    As,
    By,
    Const,
    Hidden,
    Def,
    Next,

    /// `else` — conditional alternative (supplements the base grammar).
    Else,

    /// One of the four builtin functions; payload is the builtin's name.
    Builtin(Symbol),

    /// A `/.../` regular expression literal; payload is the pattern text
    /// with delimiters stripped and escapes resolved.
    Regex(Symbol),
    /// A `"..."` quoted string literal; payload is the decoded text.
    String(Symbol),
    /// A capture-group reference, `$1` or `$name`; payload is the
    /// referenced name (without the leading `$`).
    Capref(Symbol),
    /// A plain identifier.
    Id(Symbol),
    /// A decorator invocation, `@name`; payload is the decorator's name
    /// (without the leading `@`).
    Deco(Symbol),
    /// A decimal integer literal.
    Numeric(i64),

    /// `++`
    Inc,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `+=`
    AddAssign,
    /// `=`
    Assign,

    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LSquare,
    /// `]`
    RSquare,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Returns the canonical keyword text for fixed keyword/punctuation
    /// kinds, or `None` for kinds that carry a payload.
    pub fn fixed_text(&self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Invalid => "<invalid>",
            Eof => "<eof>",
            Counter => "counter",
            Gauge => "gauge",
            As => "as",
            By => "by",
            Const => "const",
            Hidden => "hidden",
            Def => "def",
            Next => "next",
            Else => "else",
            Inc => "++",
            Minus => "-",
            Plus => "+",
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            Eq => "==",
            Ne => "!=",
            AddAssign => "+=",
            Assign => "=",
            LCurly => "{",
            RCurly => "}",
            LParen => "(",
            RParen => ")",
            LSquare => "[",
            RSquare => "]",
            Comma => ",",
            Builtin(_) | Regex(_) | String(_) | Capref(_) | Id(_) | Deco(_) | Numeric(_) => {
                return None
            }
        })
    }
}

/// A single lexed token: its kind and the source span it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, TokenKind::Invalid)
    }
}

/// Classify an already-lexed identifier lexeme as a keyword, or leave it
/// as a plain identifier.
///
/// `name` is the raw lexeme text (not yet interned); this is called once
/// per identifier lexeme, before interning, so the common case of a
/// non-keyword identifier pays for only a `match` over `&str`, not an
/// additional symbol comparison.
pub fn keyword_from_ident(name: &str) -> Option<TokenKind> {
    Some(match name {
        "counter" => TokenKind::Counter,
        "gauge" => TokenKind::Gauge,
        "as" => TokenKind::As,
        "by" => TokenKind::By,
        "const" => TokenKind::Const,
        "hidden" => TokenKind::Hidden,
        "def" => TokenKind::Def,
        "next" => TokenKind::Next,
        "else" => TokenKind::Else,
        _ => return None,
    })
}
