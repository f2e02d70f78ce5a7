//! Literal and regular-expression search
//!
//! Successful searches move point to the end of the match and record the
//! matched span for `replace-match`. A failed search leaves the buffer as it
//! was. The `looking-*` predicates never fail on a bad pattern: they fall
//! back to literal comparison instead.

use crate::error::{Error, Result};
use crate::runtime::buffer::char_index;
use crate::runtime::{Buffer, Value};
use crate::tools::{check_arity, string_arg, Tool};
use regex::Regex;

/// Compiles `pattern`, reporting failures as [`Error::InvalidRegexp`]
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidRegexp {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn search_failed(pattern: &str) -> Error {
    Error::SearchFailed {
        pattern: pattern.to_string(),
    }
}

/// Records a match given as 0-based character bounds and moves point to its end
fn accept_match(buffer: &mut Buffer, text: &str, start: usize, end: usize) {
    tracing::trace!(start, end, "search matched");
    buffer.record_search(text, start + 1, end + 1);
    buffer.set_point(end as i64 + 1);
}

// ============================================================================
// Literal search
// ============================================================================

/// search-forward STRING - Find STRING after point
pub struct SearchForwardTool;

impl Tool for SearchForwardTool {
    fn name(&self) -> &str {
        "search-forward"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let needle = string_arg(self.name(), args, 0)?;

        let from = buffer.point() - 1;
        if from >= buffer.len() {
            return Err(search_failed(needle));
        }
        let rest = &buffer.as_str()[buffer.byte_offset(from)..];
        let offset = rest.find(needle).ok_or_else(|| search_failed(needle))?;

        let start = from + char_index(rest, offset);
        let end = start + needle.chars().count();
        accept_match(buffer, needle, start, end);
        Ok(Value::empty())
    }
}

/// search-backward STRING - Find the last STRING before point
pub struct SearchBackwardTool;

impl Tool for SearchBackwardTool {
    fn name(&self) -> &str {
        "search-backward"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let needle = string_arg(self.name(), args, 0)?;

        let before = &buffer.as_str()[..buffer.byte_offset(buffer.point() - 1)];
        let offset = before.rfind(needle).ok_or_else(|| search_failed(needle))?;

        let start = char_index(before, offset);
        let end = start + needle.chars().count();
        accept_match(buffer, needle, start, end);
        Ok(Value::empty())
    }
}

// ============================================================================
// Regular expression search
// ============================================================================

/// re-search-forward REGEXP - Find the first match after point
pub struct ReSearchForwardTool;

impl Tool for ReSearchForwardTool {
    fn name(&self) -> &str {
        "re-search-forward"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let pattern = string_arg(self.name(), args, 0)?;
        let re = compile(pattern)?;

        let from = buffer.point() - 1;
        if from >= buffer.len() {
            return Err(search_failed(pattern));
        }
        let rest = &buffer.as_str()[buffer.byte_offset(from)..];
        let found = re.find(rest).ok_or_else(|| search_failed(pattern))?;

        let start = from + char_index(rest, found.start());
        let end = from + char_index(rest, found.end());
        let text = found.as_str().to_string();
        accept_match(buffer, &text, start, end);
        Ok(Value::empty())
    }
}

/// re-search-backward REGEXP - Find the last match ending before point
pub struct ReSearchBackwardTool;

impl Tool for ReSearchBackwardTool {
    fn name(&self) -> &str {
        "re-search-backward"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let pattern = string_arg(self.name(), args, 0)?;
        let re = compile(pattern)?;

        let before = &buffer.as_str()[..buffer.byte_offset(buffer.point() - 1)];
        let found = re
            .find_iter(before)
            .last()
            .ok_or_else(|| search_failed(pattern))?;

        let start = char_index(before, found.start());
        let end = char_index(before, found.end());
        let text = found.as_str().to_string();
        accept_match(buffer, &text, start, end);
        Ok(Value::empty())
    }
}

/// replace-match STRING - Replace the text matched by the last search
pub struct ReplaceMatchTool;

impl Tool for ReplaceMatchTool {
    fn name(&self) -> &str {
        "replace-match"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let replacement = string_arg(self.name(), args, 0)?;

        let (start, end) = match buffer.last_search() {
            Some(found) if !found.text.is_empty() => (found.start, found.end),
            _ => return Err(Error::NoPreviousSearch),
        };
        if start < 1 || end < start || end - 1 > buffer.len() {
            return Err(Error::InvalidMatchPositions);
        }

        buffer.splice(start - 1, end - 1, replacement);
        buffer.set_point((start - 1 + replacement.chars().count()) as i64 + 1);
        Ok(Value::empty())
    }
}

// ============================================================================
// Predicates
// ============================================================================

fn truth(value: bool) -> Value {
    if value {
        Value::t()
    } else {
        Value::nil()
    }
}

/// looking-at PATTERN - Does the text at point match PATTERN? Returns t or nil.
pub struct LookingAtTool;

impl Tool for LookingAtTool {
    fn name(&self) -> &str {
        "looking-at"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let pattern = string_arg(self.name(), args, 0)?;

        let pos = buffer.point() - 1;
        if pos >= buffer.len() {
            return Ok(Value::nil());
        }
        let rest = &buffer.as_str()[buffer.byte_offset(pos)..];

        let matched = match Regex::new(pattern) {
            Ok(re) => re.find(rest).is_some_and(|m| m.start() == 0),
            Err(_) => {
                tracing::warn!(pattern, "looking-at: invalid regexp, matching literally");
                rest.starts_with(pattern)
            }
        };
        Ok(truth(matched))
    }
}

/// looking-back PATTERN - Does the text before point end with a match? Returns t or nil.
pub struct LookingBackTool;

impl Tool for LookingBackTool {
    fn name(&self) -> &str {
        "looking-back"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let pattern = string_arg(self.name(), args, 0)?;

        let pos = buffer.point() - 1;
        if pos == 0 {
            return Ok(Value::nil());
        }
        let before = &buffer.as_str()[..buffer.byte_offset(pos)];

        let anchored =
            Regex::new(pattern).and_then(|_| Regex::new(&format!("(?:{})\\z", pattern)));
        let matched = match anchored {
            Ok(re) => re.is_match(before),
            Err(_) => {
                tracing::warn!(pattern, "looking-back: invalid regexp, matching literally");
                before.ends_with(pattern)
            }
        };
        Ok(truth(matched))
    }
}
