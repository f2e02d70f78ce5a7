//! Point movement: characters, words, lines and buffer ends

use crate::error::Result;
use crate::runtime::{Buffer, Value};
use crate::tools::{check_arity, int_arg, is_word_char, optional_count, Tool};

/// End of `count` words forward from the 0-based index `pos`.
///
/// Each step skips non-word characters, then the word after them.
pub(crate) fn forward_word_end(chars: &[char], mut pos: usize, count: i64) -> usize {
    let mut i = 0;
    while i < count && pos < chars.len() {
        while pos < chars.len() && !is_word_char(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        i += 1;
    }
    pos
}

/// Start of `count` words backward from the 0-based index `pos`
pub(crate) fn backward_word_start(chars: &[char], mut pos: usize, count: i64) -> usize {
    pos = pos.min(chars.len());
    let mut i = 0;
    while i < count && pos > 0 {
        while pos > 0 && !is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        i += 1;
    }
    pos
}

/// 0-based index of the first character of the line containing `pos`
pub(crate) fn line_start(chars: &[char], pos: usize) -> usize {
    let mut start = pos.min(chars.len());
    while start > 0 && chars[start - 1] != '\n' {
        start -= 1;
    }
    start
}

/// 0-based index of the newline ending the line containing `pos`, or the text length
pub(crate) fn line_end(chars: &[char], pos: usize) -> usize {
    let mut end = pos.min(chars.len());
    while end < chars.len() && chars[end] != '\n' {
        end += 1;
    }
    end
}

/// Index just past `count` lines starting at `pos`, each including its newline
pub(crate) fn lines_end(chars: &[char], pos: usize, count: i64) -> usize {
    let mut end = pos.min(chars.len());
    let mut i = 0;
    while i < count {
        end = line_end(chars, end);
        if end < chars.len() {
            end += 1;
        }
        i += 1;
    }
    end
}

pub(crate) fn chars_of(buffer: &Buffer) -> Vec<char> {
    buffer.as_str().chars().collect()
}

// ============================================================================
// Character motion
// ============================================================================

/// forward-char [N] - Move point forward N characters
pub struct ForwardCharTool;

impl Tool for ForwardCharTool {
    fn name(&self) -> &str {
        "forward-char"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        buffer.set_point((buffer.point() as i64).saturating_add(count));
        Ok(Value::empty())
    }
}

/// backward-char [N] - Move point backward N characters
pub struct BackwardCharTool;

impl Tool for BackwardCharTool {
    fn name(&self) -> &str {
        "backward-char"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        buffer.set_point((buffer.point() as i64).saturating_sub(count));
        Ok(Value::empty())
    }
}

/// goto-char POS - Move point to POS, clamped to the buffer
pub struct GotoCharTool;

impl Tool for GotoCharTool {
    fn name(&self) -> &str {
        "goto-char"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let pos = int_arg(self.name(), args, 0)?;
        buffer.set_point(pos);
        Ok(Value::empty())
    }
}

// ============================================================================
// Word motion
// ============================================================================

/// forward-word [N] - Move point to the end of the Nth next word
pub struct ForwardWordTool;

impl Tool for ForwardWordTool {
    fn name(&self) -> &str {
        "forward-word"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let chars = chars_of(buffer);
        let end = forward_word_end(&chars, buffer.point() - 1, count);
        buffer.set_point(end as i64 + 1);
        Ok(Value::empty())
    }
}

/// backward-word [N] - Move point to the start of the Nth previous word
pub struct BackwardWordTool;

impl Tool for BackwardWordTool {
    fn name(&self) -> &str {
        "backward-word"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let chars = chars_of(buffer);
        let start = backward_word_start(&chars, buffer.point() - 1, count);
        buffer.set_point(start as i64 + 1);
        Ok(Value::empty())
    }
}

// ============================================================================
// Line motion
// ============================================================================

/// goto-line LINE - Move point to the start of line LINE (1-based, clamped)
pub struct GotoLineTool;

impl Tool for GotoLineTool {
    fn name(&self) -> &str {
        "goto-line"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 1, 1)?;
        let requested = int_arg(self.name(), args, 0)?;

        let lines: Vec<usize> = buffer
            .as_str()
            .split('\n')
            .map(|line| line.chars().count())
            .collect();
        let line = requested.clamp(1, lines.len() as i64) as usize;
        let offset: usize = lines[..line - 1].iter().map(|len| len + 1).sum();

        buffer.set_point(offset as i64 + 1);
        Ok(Value::empty())
    }
}

/// beginning-of-line - Move point to the start of the current line
pub struct BeginningOfLineTool;

impl Tool for BeginningOfLineTool {
    fn name(&self) -> &str {
        "beginning-of-line"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        let chars = chars_of(buffer);
        let start = line_start(&chars, buffer.point() - 1);
        buffer.set_point(start as i64 + 1);
        Ok(Value::empty())
    }
}

/// end-of-line - Move point before the newline ending the current line
pub struct EndOfLineTool;

impl Tool for EndOfLineTool {
    fn name(&self) -> &str {
        "end-of-line"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        let chars = chars_of(buffer);
        let end = line_end(&chars, buffer.point() - 1);
        buffer.set_point(end as i64 + 1);
        Ok(Value::empty())
    }
}

// ============================================================================
// Buffer ends
// ============================================================================

/// beginning-of-buffer - Move point to position 1
pub struct BeginningOfBufferTool;

impl Tool for BeginningOfBufferTool {
    fn name(&self) -> &str {
        "beginning-of-buffer"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        buffer.set_point(1);
        Ok(Value::empty())
    }
}

/// end-of-buffer - Move point past the last character
pub struct EndOfBufferTool;

impl Tool for EndOfBufferTool {
    fn name(&self) -> &str {
        "end-of-buffer"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        buffer.set_point(buffer.max_position() as i64);
        Ok(Value::empty())
    }
}
