use super::Writer;
use crate::error::{Error, Result};
use crate::runtime::Value;
use serde_json::Value as Json;

/// JSON writer
///
/// `write` emits the bulk form, one array holding every form, so its output
/// parses back with the JSON parser. `write_value` emits a single form.
pub struct JsonWriter;

impl Writer for JsonWriter {
    fn write(&self, program: &[Value]) -> Result<String> {
        let forms = program
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>>>()?;
        serialize(&Json::Array(forms))
    }

    fn write_value(&self, value: &Value) -> Result<String> {
        serialize(&to_json(value)?)
    }
}

fn serialize(json: &Json) -> Result<String> {
    serde_json::to_string(json).map_err(|e| Error::WriteError(e.to_string()))
}

fn to_json(value: &Value) -> Result<Json> {
    match value {
        Value::Symbol(s) | Value::String(s) => Ok(Json::String(s.clone())),
        Value::Number(n) => number_to_json(*n),
        Value::List(items) => Ok(Json::Array(
            items.iter().map(to_json).collect::<Result<Vec<_>>>()?,
        )),
    }
}

fn number_to_json(n: f64) -> Result<Json> {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        return Ok(Json::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(Json::Number)
        .ok_or_else(|| Error::WriteError(format!("unsupported value type: number {}", n)))
}
