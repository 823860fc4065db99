use tracing::debug;

use crate::{
    ast::{Expression, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::{binary::{InfixRule, PostfixRule}, unary::PrefixRule},
    },
};

/// Binding power of a token when it follows a complete expression.
///
/// Higher tiers bind tighter. `Equals` is reserved and no token maps to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Default for tokens without an entry.
    Lowest,
    /// Reserved.
    Equals,
    /// `+ -`
    Sum,
    /// `* / E ^`
    Product,
    /// `e` used as implicit multiplication.
    Euler,
    /// `( )`
    Group,
    /// Procedure names and `!`.
    Call,
}

impl Precedence {
    /// Looks up the binding power of a token kind.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::{lexer::TokenKind, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Integer), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Exponent | TokenKind::Power => {
                Self::Product
            },
            TokenKind::Euler => Self::Euler,
            TokenKind::LParen | TokenKind::RParen => Self::Group,
            TokenKind::Procedure | TokenKind::Factorial => Self::Call,
            TokenKind::Eof | TokenKind::Integer | TokenKind::Float | TokenKind::Illegal => {
                Self::Lowest
            },
        }
    }
}

/// Pratt parser over a [`Lexer`].
///
/// The parser looks at two tokens at a time, `current` and `peek`. Errors do
/// not stop parsing: each one is recorded and the parser carries on with the
/// next statement, so the caller must check [`Parser::errors`] before using
/// the returned tree.
///
/// # Example
/// ```
/// use calcula::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("2√9 + 1"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "((2 √ 9) + 1)");
/// ```
pub struct Parser<'source> {
    lexer:              Lexer<'source>,
    pub(crate) current: Token,
    pub(crate) peek:    Token,
    errors:             Vec<ParseError>,
}

impl<'source> Parser<'source> {
    /// Creates a parser and fills its two-token window.
    #[must_use]
    pub fn new(lexer: Lexer<'source>) -> Self {
        let mut parser = Self { lexer,
                                current: Token::eof(),
                                peek: Token::eof(),
                                errors: Vec::new() };
        parser.advance();
        parser.advance();
        parser
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses expression statements until the end of input.
    ///
    /// An input holds a single expression: tokens left over once a statement
    /// has been parsed are reported as [`ParseError::UnexpectedToken`] and
    /// parsed on for further diagnostics. Statements whose expression failed
    /// to parse are left out of the program; their diagnostics are kept.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::Eof {
            if !program.statements.is_empty() {
                self.record(ParseError::UnexpectedToken { text: self.current.text.clone() });
            }
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");
        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        self.parse_expression(Precedence::Lowest)
            .map(Statement::Expression)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token must start the expression. On return the current
    /// token is the last one consumed by the expression.
    ///
    /// Returns `None` after recording a diagnostic when the expression, or
    /// any part of it, cannot be parsed.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = PrefixRule::for_kind(self.current.kind) else {
            self.record(ParseError::NoPrefixParse { kind: self.current.kind,
                                                    text: self.current.text.clone() });
            return None;
        };

        let mut left = self.parse_prefix(prefix)?;

        while precedence < self.peek_precedence() {
            if let Some(infix) = InfixRule::for_kind(self.peek.kind) {
                self.advance();
                left = self.parse_infix(infix, left)?;
            } else if let Some(postfix) = PostfixRule::for_kind(self.peek.kind) {
                self.advance();
                left = Self::parse_postfix(postfix, left);
            } else {
                break;
            }
        }

        Some(left)
    }

    /// Moves the window one token forward.
    pub(crate) fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Records a diagnostic.
    pub(crate) fn record(&mut self, error: ParseError) {
        debug!(%error, "parse diagnostic");
        self.errors.push(error);
    }
}
