//! JSON script syntax
//!
//! A form is a JSON array whose first element is a string naming the
//! function: `["insert", "text"]`. Strings become [`Value::String`], numbers
//! become [`Value::Number`] and nested arrays become nested forms. Booleans,
//! null, objects and bare scalars are rejected.
//!
//! Two entry points share the same validation: [`parse_json_str`] reads one
//! array of forms, [`JsonStream`] reads a sequence of forms one at a time.

use super::Program;
use crate::error::{Error, Result};
use crate::runtime::Value;
use serde_json::Value as Json;
use std::io::Read;

/// Parses a JSON document holding an array of forms
pub fn parse_json_str(text: &str) -> Result<Program> {
    let document: Json =
        serde_json::from_str(text).map_err(|e| Error::ParseError(format!("invalid JSON: {}", e)))?;

    let Json::Array(forms) = document else {
        return Err(Error::ParseError(
            "expected an array of forms at top level".to_string(),
        ));
    };

    forms
        .iter()
        .enumerate()
        .map(|(index, form)| convert_form(form).map_err(|reason| invalid_at(index, reason)))
        .collect()
}

/// Reads every form from a stream of whitespace-separated JSON arrays
pub fn parse_json_reader<R: Read>(reader: R) -> Result<Program> {
    JsonStream::new(reader).collect()
}

/// Lazily decodes one form per JSON value read from `R`
pub struct JsonStream<R: Read> {
    inner: serde_json::StreamDeserializer<'static, serde_json::de::IoRead<R>, Json>,
    index: usize,
}

impl<R: Read> JsonStream<R> {
    /// Wraps a reader
    pub fn new(reader: R) -> Self {
        JsonStream {
            inner: serde_json::Deserializer::from_reader(reader).into_iter::<Json>(),
            index: 0,
        }
    }
}

impl<R: Read> Iterator for JsonStream<R> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let item = self.inner.next()?;
        self.index += 1;

        Some(match item {
            Ok(json) => convert_form(&json).map_err(|reason| invalid_at(index, reason)),
            Err(e) => Err(Error::ParseError(format!(
                "invalid JSON at index {}: {}",
                index, e
            ))),
        })
    }
}

fn invalid_at(index: usize, reason: &str) -> Error {
    Error::ParseError(format!("invalid format at index {}: {}", index, reason))
}

/// Validates and converts one top-level form
fn convert_form(json: &Json) -> std::result::Result<Value, &'static str> {
    match json {
        Json::Array(items) => convert_array(items),
        Json::String(_) => Err("top-level strings are not allowed in texted JSON"),
        Json::Number(_) => Err("top-level numbers are not allowed"),
        Json::Bool(_) | Json::Null => Err("boolean and null values are not supported"),
        Json::Object(_) => Err("objects are not supported"),
    }
}

fn convert_array(items: &[Json]) -> std::result::Result<Value, &'static str> {
    let Some((head, rest)) = items.split_first() else {
        return Ok(Value::List(Vec::new()));
    };

    let Json::String(name) = head else {
        return Err("first element of array must be string");
    };

    let mut elements = Vec::with_capacity(items.len());
    elements.push(Value::Symbol(name.clone()));
    for item in rest {
        elements.push(convert_element(item)?);
    }
    Ok(Value::List(elements))
}

fn convert_element(json: &Json) -> std::result::Result<Value, &'static str> {
    match json {
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or("number out of range"),
        Json::Array(items) => convert_array(items),
        Json::Bool(_) | Json::Null => Err("boolean and null values are not supported"),
        Json::Object(_) => Err("objects are not supported"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_forms() {
        let program =
            parse_json_str(r#"[["search-forward","world"],["replace-match","earth"]]"#).unwrap();
        assert_eq!(
            program,
            vec![
                Value::list(vec![
                    Value::symbol("search-forward"),
                    Value::string("world")
                ]),
                Value::list(vec![
                    Value::symbol("replace-match"),
                    Value::string("earth")
                ]),
            ]
        );
    }

    #[test]
    fn test_nested_forms() {
        let program = parse_json_str(r#"[["goto-char", ["point-max"]], ["forward-char", -2.5]]"#)
            .unwrap();
        assert_eq!(
            program[0],
            Value::list(vec![
                Value::symbol("goto-char"),
                Value::list(vec![Value::symbol("point-max")])
            ])
        );
        assert_eq!(
            program[1],
            Value::list(vec![Value::symbol("forward-char"), Value::number(-2.5)])
        );
    }

    #[test]
    fn test_empty_array_is_allowed() {
        assert_eq!(parse_json_str("[[]]").unwrap(), vec![Value::list(vec![])]);
        assert!(parse_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejected_shapes() {
        let cases = [
            (r#"["insert"]"#, "top-level strings are not allowed"),
            ("[1]", "top-level numbers are not allowed"),
            ("[true]", "boolean and null values are not supported"),
            ("[[\"insert\", null]]", "boolean and null values are not supported"),
            (r#"[{"a": 1}]"#, "objects are not supported"),
            ("[[1, 2]]", "first element of array must be string"),
            (r#"[["goto-char", [3]]]"#, "first element of array must be string"),
        ];
        for (source, message) in cases {
            let err = parse_json_str(source).unwrap_err().to_string();
            assert!(err.contains("invalid format at index 0"), "{}", err);
            assert!(err.contains(message), "{}: {}", source, err);
        }
    }

    #[test]
    fn test_error_index() {
        let err = parse_json_str(r#"[["point"], ["insert", false]]"#).unwrap_err();
        assert!(err.to_string().contains("invalid format at index 1"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_json_str("[[\"point\""),
            Err(Error::ParseError(_))
        ));
        assert!(parse_json_str(r#"{"insert": "x"}"#).is_err());
    }

    #[test]
    fn test_streaming_reader() {
        let input = "[\"insert\", \"a\"]\n[\"forward-char\", 2]  [\"point\"]";
        let program = parse_json_reader(input.as_bytes()).unwrap();
        assert_eq!(program.len(), 3);
        assert_eq!(program[2], Value::list(vec![Value::symbol("point")]));

        let err = parse_json_reader("[\"point\"] 7".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid format at index 1"));
    }
}
