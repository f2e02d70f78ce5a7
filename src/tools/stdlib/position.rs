//! Position queries. None of these modify the buffer.

use super::movement::{chars_of, line_start};
use crate::error::Result;
use crate::runtime::{Buffer, Value};
use crate::tools::{check_arity, Tool};

/// Defines a zero-argument tool returning a number computed from the buffer
macro_rules! position_query {
    ($(#[$doc:meta])* $tool:ident, $name:literal, |$buffer:ident| $body:expr) => {
        $(#[$doc])*
        pub struct $tool;

        impl Tool for $tool {
            fn name(&self) -> &str {
                $name
            }

            fn execute(&self, args: &[Value], $buffer: &mut Buffer) -> Result<Value> {
                check_arity(self.name(), args, 0, 0)?;
                let position: usize = $body;
                Ok(Value::from(position))
            }
        }
    };
}

position_query!(
    /// point - Current point
    PointTool,
    "point",
    |buffer| buffer.point()
);

position_query!(
    /// mark - Current mark
    MarkTool,
    "mark",
    |buffer| buffer.mark()
);

position_query!(
    /// point-min - Smallest valid position, always 1
    PointMinTool,
    "point-min",
    |_buffer| 1
);

position_query!(
    /// point-max - Largest valid position, one past the last character
    PointMaxTool,
    "point-max",
    |buffer| buffer.max_position()
);

position_query!(
    /// buffer-size - Number of characters in the buffer
    BufferSizeTool,
    "buffer-size",
    |buffer| buffer.len()
);

position_query!(
    /// region-beginning - Smaller of point and mark
    RegionBeginningTool,
    "region-beginning",
    |buffer| buffer.region().0
);

position_query!(
    /// region-end - Larger of point and mark
    RegionEndTool,
    "region-end",
    |buffer| buffer.region().1
);

position_query!(
    /// current-column - 0-based column of point within its line
    CurrentColumnTool,
    "current-column",
    |buffer| {
        let pos = buffer.point() - 1;
        pos - line_start(&chars_of(buffer), pos)
    }
);

position_query!(
    /// line-number-at-pos - 1-based line number of point
    LineNumberAtPosTool,
    "line-number-at-pos",
    |buffer| {
        let pos = buffer.point() - 1;
        buffer.as_str().chars().take(pos).filter(|&c| c == '\n').count() + 1
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    fn query(tool: &dyn Tool, buffer: &mut Buffer) -> Value {
        tool.execute(&[], buffer).unwrap()
    }

    #[test]
    fn test_bounds() {
        let mut buffer = Buffer::new("Hello world");
        assert_eq!(query(&PointMinTool, &mut buffer), Value::number(1.0));
        assert_eq!(query(&PointMaxTool, &mut buffer), Value::number(12.0));
        assert_eq!(query(&BufferSizeTool, &mut buffer), Value::number(11.0));
    }

    #[test]
    fn test_region_is_normalized() {
        let mut buffer = Buffer::new("Hello world");
        buffer.set_mark(9);
        buffer.set_point(3);
        assert_eq!(query(&RegionBeginningTool, &mut buffer), Value::number(3.0));
        assert_eq!(query(&RegionEndTool, &mut buffer), Value::number(9.0));
        assert_eq!(query(&PointTool, &mut buffer), Value::number(3.0));
        assert_eq!(query(&MarkTool, &mut buffer), Value::number(9.0));
    }

    #[test]
    fn test_column_and_line() {
        let mut buffer = Buffer::new("First line\nSecond line with content\nThird line");
        buffer.set_point(6);
        assert_eq!(query(&CurrentColumnTool, &mut buffer), Value::number(5.0));
        assert_eq!(query(&LineNumberAtPosTool, &mut buffer), Value::number(1.0));

        buffer.set_point(12);
        assert_eq!(query(&CurrentColumnTool, &mut buffer), Value::number(0.0));
        assert_eq!(query(&LineNumberAtPosTool, &mut buffer), Value::number(2.0));

        buffer.set_point(100);
        assert_eq!(query(&LineNumberAtPosTool, &mut buffer), Value::number(3.0));
        assert_eq!(query(&CurrentColumnTool, &mut buffer), Value::number(10.0));
    }

    #[test]
    fn test_rejects_arguments() {
        let mut buffer = Buffer::new("");
        assert!(PointTool.execute(&[Value::number(1.0)], &mut buffer).is_err());
    }
}
