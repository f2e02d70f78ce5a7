//! Tree-walking evaluation of programs against a buffer

use crate::error::{Error, Result};
use crate::runtime::{Buffer, Environment, Value};

/// Snapshot handed to a trace callback after each top-level form
#[derive(Debug)]
pub struct TraceStep<'a> {
    /// 0-based index of the form in the program
    pub index: usize,
    /// The form just executed
    pub instruction: &'a Value,
    /// Its result
    pub result: &'a Value,
    /// Buffer state after the form
    pub buffer: &'a Buffer,
    /// Environment the form ran in
    pub environment: &'a Environment,
}

/// Evaluates `program` against `buffer`, returning the value of the last form.
///
/// Forms run in order and evaluation stops at the first error. Edits made by
/// earlier forms stay in the buffer.
pub fn eval(program: &[Value], env: &Environment, buffer: &mut Buffer) -> Result<Value> {
    eval_with_trace(program, env, buffer, None)
}

/// Like [`eval`], calling `trace` after every top-level form
pub fn eval_with_trace(
    program: &[Value],
    env: &Environment,
    buffer: &mut Buffer,
    mut trace: Option<&mut dyn FnMut(&TraceStep<'_>)>,
) -> Result<Value> {
    let mut last = Value::empty();

    for (index, form) in program.iter().enumerate() {
        tracing::debug!(index, form = %form, "evaluating form");
        if let Value::Symbol(name) = form {
            return Err(Error::InvalidForm(format!(
                "unknown expression type: symbol {}",
                name
            )));
        }
        last = evaluate(form, env, buffer)?;

        if let Some(callback) = trace.as_mut() {
            callback(&TraceStep {
                index,
                instruction: form,
                result: &last,
                buffer: &*buffer,
                environment: env,
            });
        }
    }

    Ok(last)
}

/// Evaluates one form. Strings and numbers evaluate to themselves, as do
/// symbols in argument position; a list calls the function named by its head
/// with its evaluated arguments.
fn evaluate(form: &Value, env: &Environment, buffer: &mut Buffer) -> Result<Value> {
    let Value::List(items) = form else {
        return Ok(form.clone());
    };

    let Some((head, rest)) = items.split_first() else {
        return Err(Error::InvalidForm("empty list".to_string()));
    };
    let Value::Symbol(name) = head else {
        return Err(Error::InvalidForm(
            "first element of list must be a symbol".to_string(),
        ));
    };

    let function = env.get(name)?;
    let args = rest
        .iter()
        .map(|arg| evaluate(arg, env, buffer))
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(function = %name, argc = args.len(), "calling builtin");
    function.execute(&args, buffer)
}

/// Evaluator bound to one [`Environment`]
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    /// Creates an evaluator with every builtin
    pub fn new() -> Self {
        Evaluator {
            environment: Environment::new(),
        }
    }

    /// Creates an evaluator with a caller-supplied function table
    pub fn with_environment(environment: Environment) -> Self {
        Evaluator { environment }
    }

    /// The function table
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes a program against `buffer`
    pub fn execute(&self, program: &[Value], buffer: &mut Buffer) -> Result<Value> {
        eval(program, &self.environment, buffer)
    }

    /// Executes a program, reporting each top-level form to `trace`
    pub fn execute_traced(
        &self,
        program: &[Value],
        buffer: &mut Buffer,
        trace: &mut dyn FnMut(&TraceStep<'_>),
    ) -> Result<Value> {
        eval_with_trace(program, &self.environment, buffer, Some(trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: Vec<Value>) -> Value {
        let mut items = vec![Value::symbol(name)];
        items.extend(args);
        Value::list(items)
    }

    #[test]
    fn test_empty_program() {
        let mut buffer = Buffer::new("abc");
        let result = Evaluator::new().execute(&[], &mut buffer).unwrap();
        assert_eq!(result, Value::empty());
    }

    #[test]
    fn test_result_is_last_form() {
        let program = vec![
            call("goto-char", vec![Value::number(3.0)]),
            call("point", vec![]),
        ];
        let mut buffer = Buffer::new("abcdef");
        let result = Evaluator::new().execute(&program, &mut buffer).unwrap();
        assert_eq!(result, Value::number(3.0));
    }

    #[test]
    fn test_self_evaluating_forms() {
        let mut buffer = Buffer::new("");
        let evaluator = Evaluator::new();
        for value in [Value::string("s"), Value::number(2.0)] {
            let result = evaluator
                .execute(std::slice::from_ref(&value), &mut buffer)
                .unwrap();
            assert_eq!(result, value);
        }
    }

    #[test]
    fn test_top_level_symbol_is_rejected() {
        let mut buffer = Buffer::new("abc");
        let program = vec![call("end-of-buffer", vec![]), Value::symbol("frobnicate")];
        let err = Evaluator::new().execute(&program, &mut buffer).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidForm("unknown expression type: symbol frobnicate".into())
        );
        assert_eq!(buffer.point(), 4);

        // In argument position a symbol is passed through as-is
        let program = vec![call("insert", vec![Value::symbol("nil")])];
        let err = Evaluator::new().execute(&program, &mut buffer).unwrap_err();
        assert_eq!(err.to_string(), "insert: expected string, got symbol");
    }

    #[test]
    fn test_nested_arguments() {
        let program = vec![
            call("goto-char", vec![Value::number(7.0)]),
            call("set-mark", vec![]),
            call("end-of-buffer", vec![]),
            call(
                "buffer-substring",
                vec![call("region-beginning", vec![]), call("region-end", vec![])],
            ),
        ];
        let mut buffer = Buffer::new("Hello world");
        let result = Evaluator::new().execute(&program, &mut buffer).unwrap();
        assert_eq!(result, Value::string("world"));
    }

    #[test]
    fn test_undefined_function_keeps_earlier_edits() {
        let program = vec![
            call("insert", vec![Value::string(">> ")]),
            call("no-such-function", vec![]),
            call("insert", vec![Value::string("never")]),
        ];
        let mut buffer = Buffer::new("text");
        let err = Evaluator::new().execute(&program, &mut buffer).unwrap_err();
        assert_eq!(err.to_string(), "undefined-function \"no-such-function\"");
        assert_eq!(buffer.as_str(), ">> text");
    }

    #[test]
    fn test_invalid_forms() {
        let mut buffer = Buffer::new("");
        let evaluator = Evaluator::new();

        let err = evaluator
            .execute(&[Value::list(vec![])], &mut buffer)
            .unwrap_err();
        assert_eq!(err, Error::InvalidForm("empty list".into()));

        let err = evaluator
            .execute(&[Value::list(vec![Value::string("insert")])], &mut buffer)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidForm("first element of list must be a symbol".into())
        );
    }

    #[test]
    fn test_trace_sees_every_form() {
        let program = vec![
            call("insert", vec![Value::string("ab")]),
            call("backward-char", vec![]),
            call("point", vec![]),
        ];
        let mut buffer = Buffer::new("");
        let mut steps = Vec::new();
        let result = Evaluator::new()
            .execute_traced(&program, &mut buffer, &mut |step: &TraceStep<'_>| {
                steps.push((
                    step.index,
                    step.instruction.to_string(),
                    step.buffer.point(),
                    step.result.clone(),
                ));
            })
            .unwrap();

        assert_eq!(result, Value::number(2.0));
        assert_eq!(
            steps,
            vec![
                (0, "(insert \"ab\")".to_string(), 3, Value::empty()),
                (1, "(backward-char)".to_string(), 2, Value::empty()),
                (2, "(point)".to_string(), 2, Value::number(2.0)),
            ]
        );
    }
}
