//! Setting and moving the mark

use super::movement::{chars_of, line_start, lines_end};
use crate::error::Result;
use crate::runtime::{Buffer, Value};
use crate::tools::{check_arity, int_arg, is_word_char, optional_count, Tool};

/// set-mark - Set mark at point
pub struct SetMarkTool;

impl Tool for SetMarkTool {
    fn name(&self) -> &str {
        "set-mark"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        buffer.set_mark(buffer.point() as i64);
        Ok(Value::empty())
    }
}

/// set-mark-command [POS] - Set mark at POS, or at point when omitted
pub struct SetMarkCommandTool;

impl Tool for SetMarkCommandTool {
    fn name(&self) -> &str {
        "set-mark-command"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 1)?;
        let pos = if args.is_empty() {
            buffer.point() as i64
        } else {
            int_arg(self.name(), args, 0)?
        };
        buffer.set_mark(pos);
        Ok(Value::empty())
    }
}

/// exchange-point-and-mark - Swap point and mark
pub struct ExchangePointAndMarkTool;

impl Tool for ExchangePointAndMarkTool {
    fn name(&self) -> &str {
        "exchange-point-and-mark"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        let (point, mark) = (buffer.point(), buffer.mark());
        buffer.set_point(mark as i64);
        buffer.set_mark(point as i64);
        Ok(Value::empty())
    }
}

/// mark-whole-buffer - Mark at the beginning, point at the end
pub struct MarkWholeBufferTool;

impl Tool for MarkWholeBufferTool {
    fn name(&self) -> &str {
        "mark-whole-buffer"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        buffer.set_mark(1);
        buffer.set_point(buffer.max_position() as i64);
        Ok(Value::empty())
    }
}

/// mark-word - Select the word around point: mark at its start, point at its end
pub struct MarkWordTool;

impl Tool for MarkWordTool {
    fn name(&self) -> &str {
        "mark-word"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        check_arity(self.name(), args, 0, 0)?;
        let chars = chars_of(buffer);
        let pos = buffer.point() - 1;
        if pos >= chars.len() {
            return Ok(Value::empty());
        }

        let mut start = pos;
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        let mut end = pos;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        buffer.set_mark(start as i64 + 1);
        buffer.set_point(end as i64 + 1);
        Ok(Value::empty())
    }
}

/// mark-line [N] - Mark at the start of the current line, point after N lines
pub struct MarkLineTool;

impl Tool for MarkLineTool {
    fn name(&self) -> &str {
        "mark-line"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        let count = optional_count(self.name(), args)?;
        let chars = chars_of(buffer);
        let pos = buffer.point() - 1;

        let start = line_start(&chars, pos);
        let end = lines_end(&chars, pos, count);

        buffer.set_mark(start as i64 + 1);
        buffer.set_point(end as i64 + 1);
        Ok(Value::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_mark_variants() {
        let mut buffer = Buffer::new("Hello world");
        buffer.set_point(4);
        SetMarkTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.mark(), 4);

        SetMarkCommandTool
            .execute(&[Value::number(50.0)], &mut buffer)
            .unwrap();
        assert_eq!(buffer.mark(), 12);

        buffer.set_point(2);
        SetMarkCommandTool.execute(&[], &mut buffer).unwrap();
        assert_eq!(buffer.mark(), 2);
    }

    #[test]
    fn test_exchange() {
        let mut buffer = Buffer::new("Hello world");
        buffer.set_mark(3);
        buffer.set_point(8);
        ExchangePointAndMarkTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.point(), buffer.mark()), (3, 8));
    }

    #[test]
    fn test_mark_word() {
        let mut buffer = Buffer::new("Hello world test");
        buffer.set_point(9);
        MarkWordTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.mark(), buffer.point()), (7, 12));

        buffer.set_point(17);
        buffer.set_mark(1);
        MarkWordTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.mark(), buffer.point()), (1, 17));
    }

    #[test]
    fn test_mark_line() {
        let mut buffer = Buffer::new("one\ntwo\nthree");
        buffer.set_point(6);
        MarkLineTool.execute(&[], &mut buffer).unwrap();
        assert_eq!((buffer.mark(), buffer.point()), (5, 9));

        buffer.set_point(2);
        MarkLineTool
            .execute(&[Value::number(5.0)], &mut buffer)
            .unwrap();
        assert_eq!((buffer.mark(), buffer.point()), (1, 14));
    }
}
