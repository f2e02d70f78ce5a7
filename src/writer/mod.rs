//! Writers: the inverse of each parser

mod json;
mod sexpr;
mod shell;

pub use json::JsonWriter;
pub use sexpr::SExprWriter;
pub use shell::ShellWriter;

use crate::error::Result;
use crate::parser::Syntax;
use crate::runtime::Value;

/// Renders values back into a script syntax
pub trait Writer {
    /// Renders a whole program
    fn write(&self, program: &[Value]) -> Result<String>;

    /// Renders a single top-level form
    fn write_value(&self, value: &Value) -> Result<String>;
}

/// Returns the writer for `syntax`
pub fn writer_for(syntax: Syntax) -> Box<dyn Writer> {
    match syntax {
        Syntax::Shell => Box::new(ShellWriter),
        Syntax::SExpr => Box::new(SExprWriter),
        Syntax::Json => Box::new(JsonWriter),
    }
}

/// Renders `program` in `syntax`
pub fn write(syntax: Syntax, program: &[Value]) -> Result<String> {
    writer_for(syntax).write(program)
}

/// Renders one form in `syntax`
pub fn write_value(syntax: Syntax, value: &Value) -> Result<String> {
    writer_for(syntax).write_value(value)
}
