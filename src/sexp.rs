use std::fmt::{self, Display};

use crate::ast::{Expr, Ident, LetStmt, Program, ReturnStmt, Stmt};

/// S-expression view of the tree, used for dumps and snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SExp {
    Tagged { tag: String, args: Vec<SExp> },
    Nil,
    Symbol { name: String },
}

impl Display for SExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            SExpIndent {
                sexp: self,
                nest: 0,
            }
        )
    }
}

#[derive(Debug)]
struct SExpIndent<'a> {
    sexp: &'a SExp,
    nest: u32,
}

impl<'a> Display for SExpIndent<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sexp {
            SExp::Tagged { tag, args } => {
                write!(f, "s(:{}", tag)?;
                for arg in args {
                    if matches!(arg, SExp::Tagged { .. }) {
                        write!(f, ",\n{}", Indent(self.nest + 1))?;
                    } else {
                        f.write_str(", ")?;
                    }
                    write!(
                        f,
                        "{}",
                        SExpIndent {
                            sexp: arg,
                            nest: self.nest + 1,
                        }
                    )?;
                }
                f.write_str(")")
            }
            SExp::Nil => f.write_str("nil"),
            SExp::Symbol { name } => write!(f, ":{}", name),
        }
    }
}

struct Indent(u32);

impl Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("  ")?;
        }
        Ok(())
    }
}

pub fn display_sexp(program: &Program) -> SExp {
    SExp::from(program)
}

impl From<&Program> for SExp {
    fn from(program: &Program) -> Self {
        SExp::Tagged {
            tag: "program".to_owned(),
            args: program.statements.iter().map(SExp::from).collect(),
        }
    }
}

impl From<&Stmt> for SExp {
    fn from(stmt: &Stmt) -> Self {
        match stmt {
            Stmt::Let(stmt) => stmt.into(),
            Stmt::Return(stmt) => stmt.into(),
        }
    }
}

impl From<&LetStmt> for SExp {
    fn from(stmt: &LetStmt) -> Self {
        let LetStmt { name, value, .. } = stmt;
        SExp::Tagged {
            tag: "let".to_owned(),
            args: vec![
                SExp::Symbol {
                    name: name.name.clone(),
                },
                opt_to_sexp(value.as_ref()),
            ],
        }
    }
}

impl From<&ReturnStmt> for SExp {
    fn from(stmt: &ReturnStmt) -> Self {
        SExp::Tagged {
            tag: "return".to_owned(),
            args: vec![opt_to_sexp(stmt.value.as_ref())],
        }
    }
}

impl From<&Expr> for SExp {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Ident(ident) => ident.into(),
        }
    }
}

impl From<&Ident> for SExp {
    fn from(ident: &Ident) -> Self {
        SExp::Tagged {
            tag: "ident".to_owned(),
            args: vec![SExp::Symbol {
                name: ident.name.clone(),
            }],
        }
    }
}

fn opt_to_sexp(expr: Option<&Expr>) -> SExp {
    expr.map_or(SExp::Nil, SExp::from)
}
