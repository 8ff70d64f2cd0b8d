use std::fmt;
use std::ops::BitOr;

use serde::Serialize;

use crate::token::Token;

/// Half-open byte range into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range(pub usize, pub usize);

impl BitOr for Range {
    type Output = Range;

    fn bitor(self, rhs: Range) -> Range {
        Range(self.0.min(rhs.0), self.1.max(rhs.1))
    }
}

/// The root of a parsed source. Statements are kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn range(&self) -> Range {
        match self {
            Stmt::Let(stmt) => stmt.range,
            Stmt::Return(stmt) => stmt.range,
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetStmt {
    pub token: Token,
    pub name: Ident,
    /// Not populated until expressions are parsed.
    pub value: Option<Expr>,
    pub range: Range,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnStmt {
    pub token: Token,
    /// Not populated until expressions are parsed.
    pub value: Option<Expr>,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Ident(Ident),
}

impl Expr {
    pub fn token(&self) -> &Token {
        match self {
            Expr::Ident(ident) => &ident.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn range(&self) -> Range {
        self.token().range
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub token: Token,
    pub name: String,
}

impl Ident {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl fmt::Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(ident) => write!(f, "{}", ident),
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn ident(name: &str, start: usize) -> Ident {
        Ident {
            token: Token::new(TokenKind::Ident, name, Range(start, start + name.len())),
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_display() {
        let program = Program {
            statements: vec![
                Stmt::Let(LetStmt {
                    token: Token::new(TokenKind::Let, "let", Range(0, 3)),
                    name: ident("myVar", 4),
                    value: Some(Expr::Ident(ident("anotherVar", 12))),
                    range: Range(0, 23),
                }),
                Stmt::Return(ReturnStmt {
                    token: Token::new(TokenKind::Return, "return", Range(24, 30)),
                    value: None,
                    range: Range(24, 31),
                }),
            ],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;return ;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }

    #[test]
    fn test_range_union() {
        assert_eq!(Range(4, 7) | Range(0, 3), Range(0, 7));
        assert_eq!(Range(2, 9) | Range(3, 5), Range(2, 9));
    }
}
