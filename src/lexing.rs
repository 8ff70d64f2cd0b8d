use crate::ast::Range;
use crate::token::{Token, TokenKind, TokenSource};
use bstr::{BStr, BString, ByteSlice};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};

static KEYWORDS: Lazy<HashMap<&BStr, TokenKind>> = Lazy::new(|| {
    vec![
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ]
    .into_iter()
    .map(|(k, v)| (k.as_bytes().as_bstr(), v))
    .collect::<HashMap<_, _>>()
});

/// Turns Monkey source text into tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: BString,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &[u8]) -> Self {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    fn lex_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;
        let first = match self.next() {
            // NUL terminates the input as well
            None | Some(b'\0') => {
                self.pos = self.source.len();
                return Token::new(TokenKind::Eof, "", Range(start, start));
            }
            Some(first) => first,
        };
        let kind = match first {
            b'=' => {
                self.pos += 1;
                if self.next() == Some(b'=') {
                    self.pos += 1;
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                self.pos += 1;
                if self.next() == Some(b'=') {
                    self.pos += 1;
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            b'"' => return self.lex_string(),
            _ if first.is_ascii_digit() => {
                while self.next().is_some_and(|ch| ch.is_ascii_digit()) {
                    self.pos += 1;
                }
                TokenKind::Int
            }
            _ if self.ident_start() => {
                while self.ident_continue() {
                    self.pos += bstr::decode_utf8(&self.source[self.pos..]).1;
                }
                let ident = self.source[start..self.pos].as_bstr();
                KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
            }
            _ if first < 0x80 => {
                self.pos += 1;
                match first {
                    b'+' => TokenKind::Plus,
                    b'-' => TokenKind::Minus,
                    b'*' => TokenKind::Asterisk,
                    b'/' => TokenKind::Slash,
                    b'<' => TokenKind::Lt,
                    b'>' => TokenKind::Gt,
                    b',' => TokenKind::Comma,
                    b';' => TokenKind::Semicolon,
                    b':' => TokenKind::Colon,
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    b'{' => TokenKind::LBrace,
                    b'}' => TokenKind::RBrace,
                    b'[' => TokenKind::LBracket,
                    b']' => TokenKind::RBracket,
                    _ => TokenKind::Illegal,
                }
            }
            _ => {
                // Non-letter character or a broken UTF-8 sequence
                self.pos += bstr::decode_utf8(&self.source[self.pos..]).1.max(1);
                TokenKind::Illegal
            }
        };
        let literal = self.source[start..self.pos].to_str_lossy().into_owned();
        Token::new(kind, literal, Range(start, self.pos))
    }

    fn lex_string(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        let content_start = self.pos;
        while self.next().is_some_and(|ch| ch != b'"') {
            self.pos += 1;
        }
        let content = self.source[content_start..self.pos]
            .to_str_lossy()
            .into_owned();
        // An unterminated string runs to the end of input
        if self.next() == Some(b'"') {
            self.pos += 1;
        }
        Token::new(TokenKind::String, content, Range(start, self.pos))
    }

    fn ident_start(&self) -> bool {
        match self.next_char() {
            Some(ch) if ch.is_ascii() => ch.is_ascii_alphabetic() || ch == '_',
            Some(ch) => is_letter(ch),
            None => false,
        }
    }

    fn ident_continue(&self) -> bool {
        self.ident_start() || self.next().is_some_and(|ch| ch.is_ascii_digit())
    }

    fn next_char(&self) -> Option<char> {
        bstr::decode_utf8(&self.source[self.pos..]).0
    }

    fn next(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.next().is_some_and(|ch| ch.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        self.lex_token()
    }
}

fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
