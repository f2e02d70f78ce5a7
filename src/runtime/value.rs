//! Runtime value representation

use crate::error::{Error, Result};
use std::fmt;

/// A texted value: the closed set of forms every parser produces and every builtin consumes
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Bare identifier, e.g. a function name or `nil`
    Symbol(String),
    /// Quoted text
    String(String),
    /// Every number is a double
    Number(f64),
    /// Ordered sequence of values
    List(Vec<Value>),
}

/// Kind tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Symbol`]
    Symbol,
    /// [`Value::String`]
    String,
    /// [`Value::Number`]
    Number,
    /// [`Value::List`]
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Symbol => "symbol",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Creates a symbol
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Creates a string
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// Creates a number
    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    /// Creates a list
    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(elements)
    }

    /// The `nil` symbol, returned by predicates that fail
    pub fn nil() -> Self {
        Value::Symbol("nil".to_string())
    }

    /// The `t` symbol, returned by predicates that succeed
    pub fn t() -> Self {
        Value::Symbol("t".to_string())
    }

    /// The empty string, returned by builtins that only have side effects
    pub fn empty() -> Self {
        Value::String(String::new())
    }

    /// Returns the kind tag
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Symbol(_) => ValueKind::Symbol,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Kind-tag comparison
    pub fn is_a(&self, kind: ValueKind) -> bool {
        self.kind() == kind
    }

    /// Is this the `nil` symbol?
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Symbol(s) if s == "nil")
    }

    /// Returns the symbol name
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string contents
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the list elements
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string contents or a type error naming `function`
    pub fn expect_string(&self, function: &str) -> Result<&str> {
        self.as_str().ok_or_else(|| Error::TypeError {
            function: function.to_string(),
            expected: "string".to_string(),
            got: self.kind().to_string(),
        })
    }

    /// Returns the numeric value or a type error naming `function`
    pub fn expect_number(&self, function: &str) -> Result<f64> {
        self.as_number().ok_or_else(|| Error::TypeError {
            function: function.to_string(),
            expected: "number".to_string(),
            got: self.kind().to_string(),
        })
    }
}

/// Structural equality over optional values.
///
/// Two absent values are equal; an absent value never equals a present one.
/// Present values are equal when their kinds match and their contents match
/// recursively, so lists of different length are never equal.
pub fn equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Canonical text of a number: integral values drop the fraction, the rest
/// use the shortest representation that reads back to the same double.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Double-quoted, escaped form of a string, readable by the script tokenizer
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(name) => f.write_str(name),
            Value::String(s) => f.write_str(&quote_string(s)),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}
