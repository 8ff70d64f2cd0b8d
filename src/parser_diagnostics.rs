use thiserror::Error;

use crate::ast::Range;
use crate::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        range: Range,
    },
}

impl ParseError {
    pub fn range(&self) -> Range {
        use ParseError::*;
        match self {
            UnexpectedToken { range, .. } => *range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let e = ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            actual: TokenKind::Int,
            range: Range(6, 7),
        };
        assert_eq!(
            e.to_string(),
            "expected next token to be ASSIGN, got INT instead"
        );
        assert_eq!(e.range(), Range(6, 7));
    }
}
