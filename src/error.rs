//! Error types for texted

use thiserror::Error;

/// Errors raised while parsing, evaluating or writing texted scripts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Parse errors
    /// Syntax error encountered while tokenizing or parsing shell and S-expression scripts
    ///
    /// **Triggered by:** Unterminated strings, unbalanced parentheses, invalid escapes
    /// **Example:** `(insert "hello` (missing closing quote)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        col: usize,
        /// Error description
        message: String,
    },

    /// Malformed JSON script or a JSON value of an unsupported shape
    #[error("Parse error: {0}")]
    ParseError(String),

    // Argument errors
    /// A builtin was called with the wrong number of arguments
    ///
    /// **Example:** `(insert "a" "b")`
    #[error("{function} expects {expected}, got {got}")]
    WrongArgumentCount {
        /// Builtin name
        function: String,
        /// Human readable arity, e.g. "1 argument" or "1 or 2 arguments"
        expected: String,
        /// Number of arguments received
        got: usize,
    },

    /// A builtin argument had the wrong kind
    ///
    /// **Example:** `(goto-char "ten")`
    #[error("{function}: expected {expected}, got {got}")]
    TypeError {
        /// Builtin name
        function: String,
        /// Expected value kind
        expected: String,
        /// Actual value kind
        got: String,
    },

    // Search errors
    /// A search builtin found no match; point and mark are unchanged
    #[error("search failed: {pattern:?}")]
    SearchFailed {
        /// Text or pattern searched for
        pattern: String,
    },

    /// A search builtin received a pattern that does not compile
    #[error("invalid regexp: {pattern:?}: {message}")]
    InvalidRegexp {
        /// Offending pattern
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// `replace-match` called before any successful search
    #[error("no previous search")]
    NoPreviousSearch,

    /// The recorded search span no longer fits inside the buffer
    #[error("invalid search match positions")]
    InvalidMatchPositions,

    // Evaluation errors
    /// Form head does not name a function in the environment
    #[error("undefined-function {name:?}")]
    UndefinedFunction {
        /// Function name
        name: String,
    },

    /// A list form that cannot be called
    #[error("invalid form: {0}")]
    InvalidForm(String),

    // Writer errors
    /// Value cannot be represented in the requested syntax
    #[error("write error: {0}")]
    WriteError(String),

    /// Syntax name not one of shell, sexp or json
    #[error("unknown syntax: {0}")]
    UnknownSyntax(String),
}

/// Broad classification of an [`Error`], used by callers that report failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Script text could not be parsed
    Parse,
    /// A builtin rejected its arguments before touching the buffer
    Argument,
    /// A search found nothing or could not run
    Search,
    /// The evaluator could not dispatch a form
    Evaluation,
    /// A value could not be rendered
    Write,
}

impl Error {
    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::SyntaxError { .. } | Error::ParseError(_) | Error::UnknownSyntax(_) => {
                ErrorCategory::Parse
            }

            Error::WrongArgumentCount { .. } | Error::TypeError { .. } => ErrorCategory::Argument,

            Error::SearchFailed { .. }
            | Error::InvalidRegexp { .. }
            | Error::NoPreviousSearch
            | Error::InvalidMatchPositions => ErrorCategory::Search,

            Error::UndefinedFunction { .. } | Error::InvalidForm(_) => ErrorCategory::Evaluation,

            Error::WriteError(_) => ErrorCategory::Write,
        }
    }

    /// Creates a syntax error at the given location
    pub fn syntax(line: usize, col: usize, message: impl Into<String>) -> Self {
        Error::SyntaxError {
            line,
            col,
            message: message.into(),
        }
    }
}

/// Result type for texted operations
pub type Result<T> = std::result::Result<T, Error>;
