//! Parsers for the three texted script syntaxes
//!
//! Every parser produces the same [`Program`]: an ordered list of top-level
//! [`Value`] forms. A parse error aborts the whole input.

pub mod json_parser;
mod sexpr_parser;
mod shell_parser;

pub use json_parser::{parse_json_reader, parse_json_str, JsonStream};
pub use sexpr_parser::SExprParser;
pub use shell_parser::ShellParser;

use crate::error::{Error, Result};
use crate::lexer::{ScanMode, SExprScanner};
use crate::runtime::Value;
use std::fmt;
use std::str::FromStr;

/// A parsed script: top-level forms in execution order
pub type Program = Vec<Value>;

/// Surface syntax of a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Syntax {
    /// `goto-char 7; delete-char 5`
    #[default]
    Shell,
    /// `(goto-char 7) (delete-char 5)`
    SExpr,
    /// `[["goto-char", 7], ["delete-char", 5]]`
    Json,
}

impl Syntax {
    /// All syntaxes, in display order
    pub const ALL: [Syntax; 3] = [Syntax::Shell, Syntax::SExpr, Syntax::Json];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Syntax::Shell => "shell",
            Syntax::SExpr => "sexp",
            Syntax::Json => "json",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Syntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "shell" => Ok(Syntax::Shell),
            "sexp" | "sexpr" | "lisp" => Ok(Syntax::SExpr),
            "json" => Ok(Syntax::Json),
            _ => Err(Error::UnknownSyntax(s.to_string())),
        }
    }
}

/// Parses `text` written in `syntax`
pub fn parse(syntax: Syntax, text: &str) -> Result<Program> {
    let program = match syntax {
        Syntax::Shell => {
            let tokens = SExprScanner::with_mode(text, ScanMode::Shell).scan_tokens()?;
            ShellParser::new(tokens).parse()?
        }
        Syntax::SExpr => {
            let tokens = SExprScanner::with_mode(text, ScanMode::SExpr).scan_tokens()?;
            SExprParser::new(tokens).parse()?
        }
        Syntax::Json => parse_json_str(text)?,
    };

    tracing::debug!(syntax = %syntax, forms = program.len(), "parsed script");
    Ok(program)
}

/// Converts an unquoted token into a number or a symbol.
///
/// A token is numeric only when it reads as a double and contains a digit,
/// so words such as `inf` and `nan` stay symbols.
pub fn parse_atom(text: &str) -> Value {
    if text.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<f64>() {
            return Value::Number(n);
        }
    }
    Value::Symbol(text.to_string())
}
