use super::Writer;
use crate::error::Result;
use crate::runtime::Value;

/// Canonical S-expression writer; every value is representable
pub struct SExprWriter;

impl Writer for SExprWriter {
    fn write(&self, program: &[Value]) -> Result<String> {
        let mut out = String::new();
        for value in program {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        Ok(out)
    }

    fn write_value(&self, value: &Value) -> Result<String> {
        Ok(value.to_string())
    }
}
