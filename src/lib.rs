//! # texted - a scriptable, headless text editor
//!
//! texted edits an in-memory [`Buffer`] with an Emacs-inspired vocabulary of
//! about fifty builtins: point and mark, regions, word and line motion,
//! literal and regex search, kill and replace. Scripts can be written in
//! three interchangeable syntaxes that parse to the same [`Program`]:
//!
//! | Syntax | Example |
//! |--------|---------|
//! | shell  | `goto-char 7; delete-char 5` |
//! | sexp   | `(goto-char 7) (delete-char 5)` |
//! | json   | `[["goto-char", 7], ["delete-char", 5]]` |
//!
//! ## Quick Start
//!
//! ```rust
//! use texted::{execute_script, Syntax};
//!
//! # fn main() -> texted::Result<()> {
//! let edited = execute_script("Hello world", "goto-char 7; delete-char 5", Syntax::Shell)?;
//! assert_eq!(edited, "Hello ");
//! # Ok(())
//! # }
//! ```
//!
//! ### Parse, evaluate, inspect
//!
//! The pipeline is available piece by piece:
//!
//! ```rust
//! use texted::{eval, parse, Buffer, Environment, Syntax, Value};
//!
//! # fn main() -> texted::Result<()> {
//! let program = parse(Syntax::SExpr, r#"
//!     (mark-whole-buffer)
//!     (replace-region "X")
//!     (point)
//! "#)?;
//!
//! let env = Environment::new();
//! let mut buffer = Buffer::new("Hello world");
//! let result = eval(&program, &env, &mut buffer)?;
//!
//! assert_eq!(buffer.as_str(), "X");
//! assert_eq!(result, Value::number(2.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### Search and replace
//!
//! ```rust
//! use texted::{execute_script, Syntax};
//!
//! # fn main() -> texted::Result<()> {
//! let script = r#"[["search-forward", "world"], ["replace-match", "earth"]]"#;
//! assert_eq!(execute_script("Hello world", script, Syntax::Json)?, "Hello earth");
//! # Ok(())
//! # }
//! ```
//!
//! ### Converting between syntaxes
//!
//! ```rust
//! use texted::{parse, write, Syntax};
//!
//! # fn main() -> texted::Result<()> {
//! let program = parse(Syntax::Shell, "goto-char 7; insert \"big \"")?;
//! assert_eq!(write(Syntax::SExpr, &program)?, "(goto-char 7)\n(insert \"big \")\n");
//! assert_eq!(write(Syntax::Json, &program)?, r#"[["goto-char",7],["insert","big "]]"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`] value. An unknown function stops the script,
//! but edits made by earlier forms stay in the buffer:
//!
//! ```rust
//! use texted::{eval, parse, Buffer, Environment, Error, Syntax};
//!
//! let program = parse(Syntax::Shell, "insert \"> \"; frobnicate").unwrap();
//! let mut buffer = Buffer::new("text");
//!
//! match eval(&program, &Environment::new(), &mut buffer) {
//!     Err(Error::UndefinedFunction { name }) => assert_eq!(name, "frobnicate"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert_eq!(buffer.as_str(), "> text");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Script text → Scanner → Tokens → Parser → Program → Evaluator(Environment, Buffer) → Value
//!                                    ↑                                            |
//!                                    └──────────────── Writer ←───────────────────┘
//! ```
//!
//! - [`Scanner`] - tokenizes shell and S-expression scripts
//! - [`parse`] - shell, S-expression and JSON parsers
//! - [`write`] - the inverse writers
//! - [`Evaluator`] / [`eval`] - tree-walking evaluation with an optional trace
//! - [`Environment`] - name to builtin table
//! - [`Buffer`] - text with 1-based point, mark and last search
//! - [`tools::documentation`] - static builtin reference

/// Version of the texted library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod tools;
pub mod writer;

// Re-export main types
pub use error::{Error, ErrorCategory, Result};
pub use lexer::{SExprScanner, ScanMode, Token, TokenKind};
pub use parser::{parse, parse_json_reader, Program, SExprParser, ShellParser, Syntax};
pub use runtime::{
    equal, eval, eval_with_trace, Buffer, Environment, Evaluator, SearchMatch, TraceStep, Value,
    ValueKind,
};
pub use tools::Tool;
pub use writer::{write, write_value, Writer};

/// Type alias for the script scanner (lexer).
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
pub type Parser = SExprParser;

/// Parses `script`, runs it against a fresh buffer holding `input` and
/// returns the edited text.
pub fn execute_script(input: &str, script: &str, syntax: Syntax) -> Result<String> {
    let program = parse(syntax, script)?;
    let mut buffer = Buffer::new(input);
    Evaluator::new().execute(&program, &mut buffer)?;
    Ok(buffer.into_string())
}
