use crate::ast::Program;
use crate::lexing::Lexer;
use crate::parser_diagnostics::ParseError;
use crate::token::{Token, TokenKind, TokenSource};

mod parser_impl;

/// Parses `source` with the bundled lexer.
pub fn parse(source: &[u8]) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    (program, parser.errors)
}

/// Pulls tokens from a [`TokenSource`] through a two-token window and
/// builds a [`Program`], collecting diagnostics instead of failing.
#[derive(Debug)]
pub struct Parser<S> {
    source: S,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl Parser<Lexer> {
    pub fn from_source(source: &[u8]) -> Self {
        Parser::new(Lexer::new(source))
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Parser {
            source,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Parses statements until the end of input.
    ///
    /// Malformed statements are dropped and reported through
    /// [`Parser::errors`]; the returned program only holds complete ones.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_stmt() {
                tracing::trace!("parsed statement: {}", stmt);
                program.statements.push(stmt);
            }
            self.advance();
        }
        program
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub(self) fn advance(&mut self) {
        let peek = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, peek);
    }

    pub(self) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(self) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the peek token is `kind`; records an error otherwise.
    pub(self) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let e = ParseError::UnexpectedToken {
            expected,
            actual: self.peek.kind,
            range: self.peek.range,
        };
        tracing::debug!("{:?}: {}", e.range(), e);
        self.errors.push(e);
    }
}
