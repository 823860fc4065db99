use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all diagnostics that can be recorded while parsing.
pub enum ParseError {
    /// A token that cannot start an expression was found where one was
    /// expected.
    NoPrefixParse {
        /// The kind of the offending token.
        kind: TokenKind,
        /// The offending source text.
        text: String,
    },
    /// A numeric literal could not be converted to its value.
    InvalidLiteral {
        /// The literal text.
        text: String,
        /// The kind the literal was scanned as.
        kind: TokenKind,
    },
    /// A specific token was required next but something else followed.
    ExpectedToken {
        /// The token that was required.
        expected: TokenKind,
        /// The token actually found.
        found:    TokenKind,
    },
    /// A token was valid lexically but cannot be used where it appeared.
    UnexpectedToken {
        /// The offending source text.
        text: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPrefixParse { kind, text } if text.is_empty() => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::NoPrefixParse { kind, text } => {
                write!(f, "no prefix parse function for {kind} found ('{text}')")
            },
            Self::InvalidLiteral { text, kind } => {
                let target = if *kind == TokenKind::Float { "float" } else { "integer" };
                write!(f, "could not parse \"{text}\" as {target}")
            },
            Self::ExpectedToken { expected, found } => write!(f,
                                                              "next token expected to be {expected}, got {found} instead"),
            Self::UnexpectedToken { text } => write!(f, "unexpected token '{text}'"),
        }
    }
}

impl std::error::Error for ParseError {}
