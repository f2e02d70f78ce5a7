//! String functions. These never touch the buffer.

use super::search::compile;
use crate::error::Result;
use crate::runtime::buffer::char_index;
use crate::runtime::{Buffer, Value};
use crate::tools::{check_arity, int_arg, string_arg, Tool};
use regex::Regex;

// ============================================================================
// Construction
// ============================================================================

/// concat &rest STRINGS - Join strings
pub struct ConcatTool;

impl Tool for ConcatTool {
    fn name(&self) -> &str {
        "concat"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        let mut out = String::new();
        for index in 0..args.len() {
            out.push_str(string_arg(self.name(), args, index)?);
        }
        Ok(Value::String(out))
    }
}

/// substring STRING START [END] - Characters from 1-based START up to END (exclusive)
pub struct SubstringTool;

impl Tool for SubstringTool {
    fn name(&self) -> &str {
        "substring"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 2, 3)?;
        let s = string_arg(self.name(), args, 0)?;
        let len = s.chars().count() as i64;

        let start = (int_arg(self.name(), args, 1)? - 1).max(0);
        let end = if args.len() == 3 {
            (int_arg(self.name(), args, 2)? - 1).min(len)
        } else {
            len
        };
        if start >= end {
            return Ok(Value::empty());
        }

        let text: String = s
            .chars()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect();
        Ok(Value::String(text))
    }
}

// ============================================================================
// Inspection
// ============================================================================

/// length STRING - Number of characters
pub struct LengthTool;

impl Tool for LengthTool {
    fn name(&self) -> &str {
        "length"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let s = string_arg(self.name(), args, 0)?;
        Ok(Value::from(s.chars().count()))
    }
}

/// string-match REGEXP STRING - 0-based index of the first match, or nil
pub struct StringMatchTool;

impl Tool for StringMatchTool {
    fn name(&self) -> &str {
        "string-match"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 2, 2)?;
        let pattern = string_arg(self.name(), args, 0)?;
        let s = string_arg(self.name(), args, 1)?;

        let offset = match Regex::new(pattern) {
            Ok(re) => re.find(s).map(|m| m.start()),
            Err(_) => {
                tracing::warn!(pattern, "string-match: invalid regexp, matching literally");
                s.find(pattern)
            }
        };
        Ok(match offset {
            Some(offset) => Value::from(char_index(s, offset)),
            None => Value::nil(),
        })
    }
}

// ============================================================================
// Case conversion
// ============================================================================

/// upcase STRING - Convert to upper case
pub struct UpcaseTool;

impl Tool for UpcaseTool {
    fn name(&self) -> &str {
        "upcase"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        Ok(Value::String(string_arg(self.name(), args, 0)?.to_uppercase()))
    }
}

/// downcase STRING - Convert to lower case
pub struct DowncaseTool;

impl Tool for DowncaseTool {
    fn name(&self) -> &str {
        "downcase"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        Ok(Value::String(string_arg(self.name(), args, 0)?.to_lowercase()))
    }
}

/// capitalize STRING - Upper-case the first character, lower-case the rest
pub struct CapitalizeTool;

impl Tool for CapitalizeTool {
    fn name(&self) -> &str {
        "capitalize"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let s = string_arg(self.name(), args, 0)?;

        let mut chars = s.chars();
        let result = match chars.next() {
            Some(first) => {
                let mut out: String = first.to_uppercase().collect();
                out.push_str(&chars.as_str().to_lowercase());
                out
            }
            None => String::new(),
        };
        Ok(Value::String(result))
    }
}

// ============================================================================
// Replacement
// ============================================================================

/// replace-regexp-in-string REGEXP REPLACEMENT STRING - Replace every match
///
/// `$1` and `${name}` in REPLACEMENT refer to capture groups.
pub struct ReplaceRegexpInStringTool;

impl Tool for ReplaceRegexpInStringTool {
    fn name(&self) -> &str {
        "replace-regexp-in-string"
    }

    fn execute(&self, args: &[Value], _buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 3, 3)?;
        let pattern = string_arg(self.name(), args, 0)?;
        let replacement = string_arg(self.name(), args, 1)?;
        let s = string_arg(self.name(), args, 2)?;

        let re = compile(pattern)?;
        Ok(Value::String(re.replace_all(s, replacement).into_owned()))
    }
}
