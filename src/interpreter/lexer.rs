use logos::Logos;
use tracing::trace;

/// Function names recognised by the lexer.
///
/// Every word found in this table becomes a [`TokenKind::Procedure`] token
/// whose text is the name itself. The radical sign `√` is a procedure too but
/// is scanned as a single symbol rather than as a word.
pub const KEYWORDS: &[&str] = &["log", "ln", "sin", "cos", "tan", "arcsin", "arccos", "arctan"];

/// The closed set of token categories produced by the [`Lexer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once the input is exhausted.
    Eof,
    /// Integer literal tokens, such as `42`.
    Integer,
    /// Floating-point literal tokens, such as `3.14` or `2.`.
    Float,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`
    Factorial,
    /// `E`, scientific notation.
    Exponent,
    /// `^`
    Power,
    /// `e`, Euler's number.
    Euler,
    /// A function name: one of [`KEYWORDS`] or `√`.
    Procedure,
    /// Unknown words and unrecognized characters.
    Illegal,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Integer => "INT",
            Self::Float => "FLOAT",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Factorial => "!",
            Self::Exponent => "E",
            Self::Power => "^",
            Self::Euler => "e",
            Self::Procedure => "PROCEDURE",
            Self::Illegal => "ILLEGAL",
        };
        f.pad(name)
    }
}

/// A lexical token: its category and the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind: TokenKind,
    /// The slice of source text, e.g. `"234.333"` or `"sin"`.
    pub text: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind: TokenKind::Eof,
               text: String::new() }
    }
}

/// Raw token shapes recognised by the generated scanner.
///
/// Words are classified afterwards against [`KEYWORDS`], which keeps the
/// keyword table the single source of truth for function names.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Digits with an optional single decimal point, such as `2.5` or `3.`.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// `42`
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `!`
    #[token("!")]
    Factorial,
    /// `^`
    #[token("^")]
    Power,
    /// `E`
    #[token("E")]
    Exponent,
    /// `e`
    #[token("e")]
    Euler,
    /// `√`, always a procedure regardless of context.
    #[token("√")]
    Radical,
    /// Runs of letters. `e` and `E` are reserved one-letter symbols, so a word
    /// can never start with either of them.
    #[regex(r"[a-df-zA-DF-Z][a-zA-Z]*")]
    Word,
}

impl RawToken {
    fn classify(self, text: &str) -> TokenKind {
        match self {
            Self::Float => TokenKind::Float,
            Self::Integer => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Factorial => TokenKind::Factorial,
            Self::Power => TokenKind::Power,
            Self::Exponent => TokenKind::Exponent,
            Self::Euler => TokenKind::Euler,
            Self::Radical => TokenKind::Procedure,
            Self::Word => lookup_word(text),
        }
    }
}

/// Classifies a scanned word against the keyword table.
///
/// # Example
/// ```
/// use calcula::interpreter::lexer::{TokenKind, lookup_word};
///
/// assert_eq!(lookup_word("arctan"), TokenKind::Procedure);
/// assert_eq!(lookup_word("sine"), TokenKind::Illegal);
/// ```
#[must_use]
pub fn lookup_word(word: &str) -> TokenKind {
    if KEYWORDS.contains(&word) {
        TokenKind::Procedure
    } else {
        TokenKind::Illegal
    }
}

/// Lazy, forward-only tokenizer over a single expression.
///
/// Call [`Lexer::next_token`] until it yields [`TokenKind::Eof`]; further
/// calls keep returning `Eof`. The lexer also implements [`Iterator`], which
/// stops right before the end-of-input token.
///
/// # Example
/// ```
/// use calcula::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("2√9");
/// assert_eq!(lexer.next_token().kind, TokenKind::Integer);
/// assert_eq!(lexer.next_token().text, "√");
/// assert_eq!(lexer.next_token().text, "9");
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: RawToken::lexer(source) }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        let Some(raw) = self.inner.next() else {
            return Token::eof();
        };

        let text = self.inner.slice();
        let kind = match raw {
            Ok(raw) => raw.classify(text),
            Err(()) => TokenKind::Illegal,
        };

        trace!(%kind, text, "scanned token");
        Token::new(kind, text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}
