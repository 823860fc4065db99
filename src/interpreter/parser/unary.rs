use crate::{
    ast::{Expression, PrefixOperator, Procedure},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

/// Strategies for tokens that start an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixRule {
    /// Integer literal.
    Integer,
    /// Float literal.
    Float,
    /// The Euler constant `e`.
    Euler,
    /// `( expression )`
    Group,
    /// `name ( expression )`
    Call,
    /// `+ expression` or `- expression`
    Sign,
}

impl PrefixRule {
    /// Selects the prefix strategy for a token kind, if it has one.
    #[must_use]
    pub const fn for_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Integer => Some(Self::Integer),
            TokenKind::Float => Some(Self::Float),
            TokenKind::Euler => Some(Self::Euler),
            TokenKind::LParen => Some(Self::Group),
            TokenKind::Procedure => Some(Self::Call),
            TokenKind::Plus | TokenKind::Minus => Some(Self::Sign),
            _ => None,
        }
    }
}

impl Parser<'_> {
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self, rule: PrefixRule)
                                                       -> Option<Expression> {
        match rule {
            PrefixRule::Integer => self.parse_integer(),
            PrefixRule::Float => self.parse_float(),
            PrefixRule::Euler => Some(Expression::euler()),
            PrefixRule::Group => self.parse_grouping(),
            PrefixRule::Call => self.parse_call(),
            PrefixRule::Sign => self.parse_sign(),
        }
    }

    fn parse_integer(&mut self) -> Option<Expression> {
        if let Ok(value) = self.current.text.parse() {
            return Some(Expression::Integer(value));
        }

        self.record(ParseError::InvalidLiteral { text: self.current.text.clone(),
                                                 kind: TokenKind::Integer });
        None
    }

    fn parse_float(&mut self) -> Option<Expression> {
        if let Ok(value) = self.current.text.parse() {
            return Some(Expression::Float(value));
        }

        self.record(ParseError::InvalidLiteral { text: self.current.text.clone(),
                                                 kind: TokenKind::Float });
        None
    }

    /// Parses `( expression )` with the current token on `(`.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expression)
    }

    /// Parses a procedure call with the current token on the procedure name.
    ///
    /// The argument must be parenthesized: `sin(30)`, `√(9)`.
    ///
    /// Grammar: `call := procedure "(" expression ")"`
    fn parse_call(&mut self) -> Option<Expression> {
        let Some(procedure) = Procedure::from_name(&self.current.text) else {
            self.record(ParseError::UnexpectedToken { text: self.current.text.clone() });
            return None;
        };

        self.expect_peek(TokenKind::LParen)?;
        let argument = self.parse_grouping()?;

        Some(Expression::Call { procedure,
                                argument: Box::new(argument) })
    }

    /// Parses a signed operand.
    ///
    /// The operand is parsed at the sum tier, so `-2*3` is `-(2*3)` while
    /// `-2+3` is `(-2)+3`.
    fn parse_sign(&mut self) -> Option<Expression> {
        let operator = match self.current.kind {
            TokenKind::Plus => PrefixOperator::Plus,
            _ => PrefixOperator::Minus,
        };
        let precedence = self.current_precedence();

        self.advance();
        let operand = self.parse_expression(precedence)?;

        Some(Expression::Prefix { operator,
                                  operand: Box::new(operand) })
    }
}
