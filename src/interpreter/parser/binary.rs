use crate::{
    ast::{Expression, InfixOperator, PostfixOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

/// Strategies for tokens that follow a complete expression and take a
/// right-hand operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixRule {
    /// `left op right`, including `a √ b`.
    Binary,
    /// `left e`, implicit multiplication by Euler's number.
    Euler,
}

impl InfixRule {
    /// Selects the infix strategy for a token kind, if it has one.
    #[must_use]
    pub const fn for_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Exponent
            | TokenKind::Power
            | TokenKind::Procedure => Some(Self::Binary),
            TokenKind::Euler => Some(Self::Euler),
            _ => None,
        }
    }
}

/// Strategies for tokens that close over the preceding expression without a
/// right-hand operand. Only consulted when no infix strategy exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixRule {
    /// `left !`
    Factorial,
}

impl PostfixRule {
    /// Selects the postfix strategy for a token kind, if it has one.
    #[must_use]
    pub const fn for_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Factorial => Some(Self::Factorial),
            _ => None,
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// A procedure token is only a binary operator when it is the radical `√`.
///
/// # Example
/// ```
/// use calcula::{
///     ast::InfixOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_infix_operator,
///     },
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::new(TokenKind::Power, "^")),
///            Some(InfixOperator::Power));
/// assert_eq!(token_to_infix_operator(&Token::new(TokenKind::Procedure, "√")),
///            Some(InfixOperator::Root));
/// assert_eq!(token_to_infix_operator(&Token::new(TokenKind::Procedure, "sin")), None);
/// ```
#[must_use]
pub fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token.kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Exponent => Some(InfixOperator::Exponent),
        TokenKind::Power => Some(InfixOperator::Power),
        TokenKind::Procedure if token.text == "√" => Some(InfixOperator::Root),
        _ => None,
    }
}

impl Parser<'_> {
    /// Continues `left` with the current token as the operator.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      rule: InfixRule,
                                                      left: Expression)
                                                      -> Option<Expression> {
        match rule {
            InfixRule::Binary => self.parse_binary(left),
            InfixRule::Euler => {
                Some(Expression::infix(InfixOperator::Mul, left, Expression::euler()))
            },
        }
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The right operand is parsed at the operator's own tier, so chains
    /// within a tier associate to the left: `2*3^2` is `(2*3)^2`.
    ///
    /// Grammar: `binary := expression operator expression`
    fn parse_binary(&mut self, left: Expression) -> Option<Expression> {
        let Some(operator) = token_to_infix_operator(&self.current) else {
            self.record(ParseError::UnexpectedToken { text: self.current.text.clone() });
            return None;
        };
        let precedence = self.current_precedence();

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::infix(operator, left, right))
    }

    pub(in crate::interpreter::parser) fn parse_postfix(rule: PostfixRule,
                                                        operand: Expression)
                                                        -> Expression {
        match rule {
            PostfixRule::Factorial => Expression::Postfix { operator: PostfixOperator::Factorial,
                                                            operand:  Box::new(operand), },
        }
    }
}
