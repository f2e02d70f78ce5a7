//! Lexical analysis shared by the shell and S-expression syntaxes

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::{ScanMode, SExprScanner};
pub use token::{Token, TokenKind};
