//! Text insertion, deletion and extraction
//!
//! Every deletion works on a 0-based half-open span clamped into the buffer,
//! and an empty or inverted span leaves the buffer untouched.

use super::movement::{backward_word_start, chars_of, forward_word_end, line_end, line_start, lines_end};
use crate::error::Result;
use crate::runtime::{Buffer, Value};
use crate::tools::{check_arity, int_arg, optional_count, string_arg, Tool};

/// Region as a 0-based half-open span
fn region_span(buffer: &Buffer) -> (usize, usize) {
    let (start, end) = buffer.region();
    (start - 1, (end - 1).min(buffer.len()))
}

// ============================================================================
// Insertion and replacement
// ============================================================================

/// insert STRING - Insert text at point, leaving point after it
pub struct InsertTool;

impl Tool for InsertTool {
    fn name(&self) -> &str {
        "insert"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let text = string_arg(self.name(), args, 0)?;
        buffer.insert(text);
        Ok(Value::empty())
    }
}

/// replace-region STRING - Replace the region, leaving point after the new text
pub struct ReplaceRegionTool;

impl Tool for ReplaceRegionTool {
    fn name(&self) -> &str {
        "replace-region"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let text = string_arg(self.name(), args, 0)?;

        let (start, end) = region_span(buffer);
        if start >= end {
            return Ok(Value::empty());
        }
        buffer.splice(start, end, text);
        buffer.set_point((start + text.chars().count()) as i64 + 1);
        Ok(Value::empty())
    }
}

// ============================================================================
// Character deletion
// ============================================================================

/// delete-char [N] - Delete N characters after point
pub struct DeleteCharTool;

impl Tool for DeleteCharTool {
    fn name(&self) -> &str {
        "delete-char"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let start = buffer.point() - 1;
        if count <= 0 || start >= buffer.len() {
            return Ok(Value::empty());
        }
        let end = start.saturating_add(count as usize).min(buffer.len());
        buffer.delete(start, end);
        Ok(Value::empty())
    }
}

/// delete-backward-char [N] - Delete N characters before point
pub struct DeleteBackwardCharTool;

impl Tool for DeleteBackwardCharTool {
    fn name(&self) -> &str {
        "delete-backward-char"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let end = (buffer.point() - 1).min(buffer.len());
        if count <= 0 {
            return Ok(Value::empty());
        }
        let start = end.saturating_sub(count as usize);
        if start >= end {
            return Ok(Value::empty());
        }
        buffer.delete(start, end);
        buffer.set_point(start as i64 + 1);
        Ok(Value::empty())
    }
}

/// delete-region - Delete the text between point and mark
pub struct DeleteRegionTool;

impl Tool for DeleteRegionTool {
    fn name(&self) -> &str {
        "delete-region"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        let (start, end) = region_span(buffer);
        if start >= end {
            return Ok(Value::empty());
        }
        buffer.delete(start, end);
        buffer.set_point(start as i64 + 1);
        Ok(Value::empty())
    }
}

// ============================================================================
// Line deletion
// ============================================================================

/// delete-line [N] - Delete N whole lines starting with the current one
pub struct DeleteLineTool;

impl Tool for DeleteLineTool {
    fn name(&self) -> &str {
        "delete-line"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        if count <= 0 {
            return Ok(Value::empty());
        }
        let chars = chars_of(buffer);
        let pos = buffer.point() - 1;
        let start = line_start(&chars, pos);
        let end = lines_end(&chars, pos, count);

        buffer.delete(start, end);
        buffer.set_point(start as i64 + 1);
        Ok(Value::empty())
    }
}

/// kill-line [N] - Delete the rest of the line after the character at point,
/// or N whole lines from point. Point does not move.
pub struct KillLineTool;

impl Tool for KillLineTool {
    fn name(&self) -> &str {
        "kill-line"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let chars = chars_of(buffer);
        let pos = buffer.point() - 1;
        if count <= 0 || pos >= chars.len() {
            return Ok(Value::empty());
        }

        let (start, end) = if count == 1 {
            (pos + 1, line_end(&chars, pos + 1))
        } else {
            (pos, lines_end(&chars, pos, count))
        };

        let point = buffer.point();
        buffer.delete(start, end);
        buffer.set_point(point as i64);
        Ok(Value::empty())
    }
}

// ============================================================================
// Word deletion
// ============================================================================

/// kill-word [N] - Delete forward to the end of the Nth word. Point does not move.
pub struct KillWordTool;

impl Tool for KillWordTool {
    fn name(&self) -> &str {
        "kill-word"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let chars = chars_of(buffer);
        let start = buffer.point() - 1;
        let end = forward_word_end(&chars, start, count);
        if start < end {
            buffer.delete(start, end);
        }
        Ok(Value::empty())
    }
}

/// backward-kill-word [N] - Delete back to the start of the Nth previous word,
/// including the character at point
pub struct BackwardKillWordTool;

impl Tool for BackwardKillWordTool {
    fn name(&self) -> &str {
        "backward-kill-word"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        if count <= 0 {
            return Ok(Value::empty());
        }
        let chars = chars_of(buffer);
        let origin = buffer.point() - 1;
        let start = backward_word_start(&chars, origin, count);
        let end = (origin + 1).min(chars.len());
        if start >= end {
            return Ok(Value::empty());
        }

        buffer.delete(start, end);
        buffer.set_point(start as i64 + 1);
        Ok(Value::empty())
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// buffer-substring START END - Text between two 1-based positions; END -1 means end of buffer
pub struct BufferSubstringTool;

impl Tool for BufferSubstringTool {
    fn name(&self) -> &str {
        "buffer-substring"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 2, 2)?;
        let start = int_arg(self.name(), args, 0)?;
        let mut end = int_arg(self.name(), args, 1)?;
        if end == -1 {
            end = buffer.max_position() as i64;
        }

        let start = (start - 1).max(0);
        let end = (end - 1).min(buffer.len() as i64);
        if start >= end {
            return Ok(Value::empty());
        }
        Ok(Value::string(buffer.substring(start as usize, end as usize)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_at(text: &str, point: i64) -> Buffer {
        let mut buffer = Buffer::new(text);
        buffer.set_point(point);
        buffer
    }

    #[test]
    fn test_insert_requires_one_string() {
        let mut buffer = Buffer::new("");
        assert!(InsertTool.execute(&[], &mut buffer).is_err());
        assert!(InsertTool
            .execute(&[Value::number(1.0)], &mut buffer)
            .is_err());
        InsertTool
            .execute(&[Value::string("abc")], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("abc", 4));
    }

    #[test]
    fn test_delete_char() {
        let mut buffer = buffer_at("Hello world", 7);
        DeleteCharTool
            .execute(&[Value::number(5.0)], &mut buffer)
            .unwrap();
        assert_eq!(buffer.as_str(), "Hello ");
        assert_eq!(buffer.point(), 7);

        DeleteCharTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "Hello ");

        let mut buffer = buffer_at("abc", 1);
        DeleteCharTool
            .execute(&[Value::number(-2.0)], &mut buffer)
            .unwrap();
        assert_eq!(buffer.as_str(), "abc");
    }

    #[test]
    fn test_delete_backward_char() {
        let mut buffer = buffer_at("Hello", 6);
        DeleteBackwardCharTool
            .execute(&[Value::number(2.0)], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("Hel", 4));

        DeleteBackwardCharTool
            .execute(&[Value::number(10.0)], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("", 1));
    }

    #[test]
    fn test_region_edits() {
        let mut buffer = buffer_at("Hello world", 6);
        buffer.set_mark(12);
        DeleteRegionTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("Hello", 6));

        let mut buffer = buffer_at("Hello world", 1);
        buffer.set_mark(6);
        ReplaceRegionTool
            .execute(&[Value::string("Goodbye")], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("Goodbye world", 8));
    }

    #[test]
    fn test_empty_region_is_noop() {
        let mut buffer = buffer_at("abc", 2);
        buffer.set_mark(2);
        ReplaceRegionTool
            .execute(&[Value::string("X")], &mut buffer)
            .unwrap();
        DeleteRegionTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("abc", 2));
    }

    #[test]
    fn test_delete_line() {
        let mut buffer = buffer_at("one\ntwo\nthree", 6);
        DeleteLineTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("one\nthree", 5));

        DeleteLineTool
            .execute(&[Value::number(3.0)], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("one\n", 5));
    }

    #[test]
    fn test_kill_line() {
        let text = "First line content\nSecond line\nThird line";
        let mut buffer = buffer_at(text, 8);
        KillLineTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "First li\nSecond line\nThird line");
        assert_eq!(buffer.point(), 8);

        KillLineTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "First li\nSecond line\nThird line");

        let mut buffer = buffer_at(text, 9);
        KillLineTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "First lin\nSecond line\nThird line");
        // The newline at point is kept; the next line's text goes
        buffer.set_point(10);
        KillLineTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.as_str(), "First lin\n\nThird line");
        assert_eq!(buffer.point(), 10);

        let mut buffer = buffer_at(text, 1);
        KillLineTool
            .execute(&[Value::number(2.0)], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("Third line", 1));
    }

    #[test]
    fn test_kill_word() {
        let mut buffer = buffer_at("Hello world test", 3);
        KillWordTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("He world test", 3));

        let mut buffer = buffer_at("Hello world test buffer content", 1);
        KillWordTool
            .execute(&[Value::number(2.0)], &mut buffer)
            .unwrap();
        assert_eq!(buffer.as_str(), " test buffer content");
    }

    #[test]
    fn test_backward_kill_word() {
        let mut buffer = buffer_at("Hello world test", 17);
        BackwardKillWordTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("Hello world ", 13));

        let mut buffer = buffer_at("Hello world test buffer content", 25);
        BackwardKillWordTool
            .execute(&[Value::number(2.0)], &mut buffer)
            .unwrap();
        assert_eq!((buffer.as_str(), buffer.point()), ("Hello world ontent", 13));
    }

    #[test]
    fn test_buffer_substring() {
        let mut buffer = Buffer::new("abcdef");
        let get = |buffer: &mut Buffer, start: f64, end: f64| {
            BufferSubstringTool
                .execute(&[Value::number(start), Value::number(end)], buffer)
                .unwrap()
        };
        assert_eq!(get(&mut buffer, 1.0, -1.0), Value::string("abcdef"));
        assert_eq!(get(&mut buffer, 2.0, 4.0), Value::string("bc"));
        assert_eq!(get(&mut buffer, -5.0, 100.0), Value::string("abcdef"));
        assert_eq!(get(&mut buffer, 4.0, 2.0), Value::string(""));
        assert_eq!(get(&mut buffer, 1.0, -2.0), Value::string(""));
        assert_eq!(buffer.as_str(), "abcdef");
    }
}
