#![forbid(unsafe_code)]
//! colplug-exec: the evaluator and the `mp` namespace facade.
//!
//! Evaluation is synchronous and allocation-only: resolve an operator, check
//! arity and lengths, coerce, dispatch on the kernel kind, return a new column.

pub mod evaluator;
pub mod metrics;
pub mod namespace;

pub use evaluator::{EvaluationRequest, Evaluator, ExecError};
pub use namespace::Namespace;
