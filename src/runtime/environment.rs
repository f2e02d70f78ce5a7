use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::runtime::{Buffer, Value};
use crate::tools::{stdlib, Tool};

/// Function table consulted by the evaluator
///
/// Built once, then only read. Cloning shares the underlying tools.
#[derive(Clone)]
pub struct Environment {
    functions: HashMap<String, Arc<dyn Tool>>,
}

impl Environment {
    /// Creates an environment holding every builtin
    pub fn new() -> Self {
        Self::from_tools(stdlib::all_tools())
    }

    /// Creates an environment with no functions
    pub fn empty() -> Self {
        Environment {
            functions: HashMap::new(),
        }
    }

    /// Creates an environment from an explicit list of tools
    pub fn from_tools<I>(tools: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let functions = tools
            .into_iter()
            .map(|tool| (tool.name().to_string(), tool))
            .collect();
        Environment { functions }
    }

    /// Returns a copy of this environment with `tool` added, replacing any
    /// function of the same name
    pub fn with_tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.functions.insert(tool.name().to_string(), Arc::new(tool));
        self
    }

    /// Returns a copy of this environment with a closure bound to `name`
    pub fn with_function<F>(self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Value], &mut Buffer) -> Result<Value> + Send + Sync + 'static,
    {
        self.with_tool(FnTool {
            name: name.into(),
            function,
        })
    }

    /// Looks up a function by exact name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Tool>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedFunction {
                name: name.to_string(),
            })
    }

    /// Is `name` bound?
    pub fn has(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Sorted function names
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of bound functions
    pub fn count(&self) -> usize {
        self.functions.len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("functions", &self.function_names())
            .finish()
    }
}

/// Adapter turning a closure into a [`Tool`]
struct FnTool<F> {
    name: String,
    function: F,
}

impl<F> Tool for FnTool<F>
where
    F: Fn(&[Value], &mut Buffer) -> Result<Value> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "user-supplied function"
    }

    fn execute(&self, args: &[Value], buffer: &mut Buffer) -> Result<Value> {
        (self.function)(args, buffer)
    }
}
