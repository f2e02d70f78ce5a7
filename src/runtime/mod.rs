//! Runtime: values, buffers, the function environment and the evaluator

pub mod buffer;
mod environment;
mod evaluator;
pub mod value;

pub use buffer::{Buffer, SearchMatch};
pub use environment::Environment;
pub use evaluator::{eval, eval_with_trace, Evaluator, TraceStep};
pub use value::{equal, Value, ValueKind};
