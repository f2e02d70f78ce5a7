use super::Writer;
use crate::error::{Error, Result};
use crate::runtime::value::{format_number, quote_string};
use crate::runtime::Value;

/// Shell syntax writer: one flat command per line
pub struct ShellWriter;

impl Writer for ShellWriter {
    fn write(&self, program: &[Value]) -> Result<String> {
        let lines = program
            .iter()
            .map(|value| self.write_value(value))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }

    fn write_value(&self, value: &Value) -> Result<String> {
        let Value::List(items) = value else {
            return Err(Error::WriteError(format!(
                "shell format only supports lists at top level, got {}",
                value.kind()
            )));
        };

        let words = items
            .iter()
            .map(|item| match item {
                Value::Symbol(name) => Ok(name.clone()),
                Value::String(s) => Ok(quote_string(s)),
                Value::Number(n) => Ok(format_number(*n)),
                Value::List(_) => Err(Error::WriteError(
                    "nested lists are not supported in shell format".to_string(),
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(words.join(" "))
    }
}
