//! Builtin function framework
//!
//! Every builtin is a [`Tool`]: a named `(args, buffer) -> value` primitive.
//! Argument validation always happens before the buffer is touched.

pub mod documentation;
pub mod stdlib;

use crate::error::{Error, Result};
use crate::runtime::{Buffer, Value};

/// Tool trait - every builtin implements this
pub trait Tool: Send + Sync {
    /// Name scripts call the tool by
    fn name(&self) -> &str;

    /// One-line description, taken from the documentation table by default
    fn description(&self) -> &str {
        documentation::lookup(self.name())
            .map(|doc| doc.summary)
            .unwrap_or("")
    }

    /// Execute the tool against `buffer`
    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value>;
}

/// Checks that `args.len()` lies in `min..=max`
pub fn check_arity(function: &str, args: &[Value], min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }
    let expected = match (min, max) {
        (0, 0) => "no arguments".to_string(),
        (1, 1) => "1 argument".to_string(),
        (min, max) if min == max => format!("{} arguments", min),
        (min, max) if max == min + 1 => format!("{} or {} arguments", min, max),
        (min, max) => format!("{} to {} arguments", min, max),
    };
    Err(Error::WrongArgumentCount {
        function: function.to_string(),
        expected,
        got: args.len(),
    })
}

/// String argument at `index`
pub fn string_arg<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a str> {
    arg(function, args, index)?.expect_string(function)
}

/// Numeric argument at `index`, truncated toward zero
pub fn int_arg(function: &str, args: &[Value], index: usize) -> Result<i64> {
    Ok(arg(function, args, index)?.expect_number(function)? as i64)
}

/// Optional repeat count: no arguments means 1, otherwise exactly one number
pub fn optional_count(function: &str, args: &[Value]) -> Result<i64> {
    check_arity(function, args, 0, 1)?;
    if args.is_empty() {
        Ok(1)
    } else {
        int_arg(function, args, 0)
    }
}

fn arg<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a Value> {
    args.get(index).ok_or_else(|| Error::WrongArgumentCount {
        function: function.to_string(),
        expected: format!("at least {} arguments", index + 1),
        got: args.len(),
    })
}

/// Is `c` part of a word? Words are runs of ASCII letters and digits.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_arity_messages() {
        let two = [Value::number(1.0), Value::number(2.0)];
        let err = check_arity("insert", &two, 1, 1).unwrap_err();
        assert_eq!(err.to_string(), "insert expects 1 argument, got 2");

        let err = check_arity("point", &two, 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "point expects no arguments, got 2");

        let err = check_arity("forward-char", &two, 0, 1).unwrap_err();
        assert_eq!(err.to_string(), "forward-char expects 0 or 1 arguments, got 2");

        assert!(check_arity("substring", &two, 2, 3).is_ok());
    }

    #[test]
    fn test_optional_count() {
        assert_eq!(optional_count("forward-char", &[]), Ok(1));
        assert_eq!(optional_count("forward-char", &[Value::number(3.9)]), Ok(3));
        assert_eq!(optional_count("forward-char", &[Value::number(-2.0)]), Ok(-2));
        assert!(matches!(
            optional_count("forward-char", &[Value::string("3")]),
            Err(Error::TypeError { .. })
        ));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('_'));
        assert!(!is_word_char('é'));
        assert!(!is_word_char(' '));
    }
}
