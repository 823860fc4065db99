use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Binding power of the lookahead token.
    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    /// Binding power of the current token.
    pub(in crate::interpreter::parser) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Advances past the lookahead token if it has the expected kind.
    ///
    /// Otherwise records [`ParseError::ExpectedToken`] and leaves the window
    /// untouched.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, expected: TokenKind)
                                                      -> Option<()> {
        if self.peek.kind == expected {
            self.advance();
            return Some(());
        }

        self.record(ParseError::ExpectedToken { expected,
                                                found: self.peek.kind });
        None
    }
}
