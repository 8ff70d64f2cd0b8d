use super::Parser;
use crate::ast::{Ident, LetStmt, ReturnStmt, Stmt};
use crate::token::{TokenKind, TokenSource};

impl<S: TokenSource> Parser<S> {
    pub(super) fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_stmt().map(Stmt::Let),
            TokenKind::Return => Some(Stmt::Return(self.parse_return_stmt())),
            _ => None,
        }
    }

    fn parse_let_stmt(&mut self) -> Option<LetStmt> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Ident {
            token: self.current.clone(),
            name: self.current.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // TODO: parse the bound expression once expressions are supported
        self.skip_to_semicolon();

        let range = token.range | self.current.range;
        Some(LetStmt {
            token,
            name,
            value: None,
            range,
        })
    }

    fn parse_return_stmt(&mut self) -> ReturnStmt {
        let token = self.current.clone();
        self.advance();

        // TODO: parse the returned expression once expressions are supported
        self.skip_to_semicolon();

        let range = token.range | self.current.range;
        ReturnStmt {
            token,
            value: None,
            range,
        }
    }

    /// Leaves the current token on the next `;`, or on EOF if none is left.
    fn skip_to_semicolon(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.advance();
        }
    }
}
