pub use crate::parser::{parse, Parser};
pub use crate::parser_diagnostics::ParseError;

pub mod ast;
pub mod lexing;
pub mod parser;
pub mod parser_diagnostics;
pub mod pos;
pub mod sexp;
pub mod token;
