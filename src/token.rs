use std::fmt;

use serde::Serialize;

use crate::ast::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, range: Range) -> Self {
        Token {
            kind,
            literal: literal.into(),
            range,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A character the lexer does not understand
    Illegal,
    /// End of input; repeated forever once reached
    Eof,
    /// `foo`
    Ident,
    /// `42`
    Int,
    /// `"foo"`
    String,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Illegal => "ILLEGAL",
            Eof => "EOF",
            Ident => "IDENT",
            Int => "INT",
            String => "STRING",
            Assign => "ASSIGN",
            Plus => "PLUS",
            Minus => "MINUS",
            Bang => "BANG",
            Asterisk => "ASTERISK",
            Slash => "SLASH",
            Lt => "LT",
            Gt => "GT",
            Eq => "EQ",
            NotEq => "NOT_EQ",
            Comma => "COMMA",
            Semicolon => "SEMICOLON",
            Colon => "COLON",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
            Function => "FUNCTION",
            Let => "LET",
            True => "TRUE",
            False => "FALSE",
            If => "IF",
            Else => "ELSE",
            Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything the parser can pull tokens from.
///
/// Implementations must keep returning an [`TokenKind::Eof`] token once the
/// input is exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A [`TokenSource`] over tokens that were produced up front.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    end: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or(0, |token| token.range.1);
        TokenStream {
            tokens: tokens.into_iter(),
            end,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.end = self.end.max(token.range.1);
                token
            }
            None => Token::new(TokenKind::Eof, "", Range(self.end, self.end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
        assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_stream_repeats_eof() {
        let mut stream = TokenStream::new(vec![
            Token::new(TokenKind::Return, "return", Range(0, 6)),
            Token::new(TokenKind::Semicolon, ";", Range(6, 7)),
        ]);
        assert_eq!(stream.next_token().kind, TokenKind::Return);
        assert_eq!(stream.next_token().kind, TokenKind::Semicolon);
        for _ in 0..3 {
            let token = stream.next_token();
            assert_eq!(token, Token::new(TokenKind::Eof, "", Range(7, 7)));
        }
    }

    #[test]
    fn test_empty_token_stream() {
        let mut stream = TokenStream::new(vec![]);
        assert_eq!(
            stream.next_token(),
            Token::new(TokenKind::Eof, "", Range(0, 0))
        );
    }
}
