#![forbid(unsafe_code)]
//! colplug: column-oriented expression evaluation with a pluggable operator
//! registry.
//!
//! Re-exports the public surface of the workspace crates so hosts depend on
//! one package.

pub use colplug_core::prelude::*;
pub use colplug_exec::{EvaluationRequest, Evaluator, ExecError, Namespace};
pub use colplug_operators::{
    Arity, Coercion, ElementwiseKernel, Kernel, OpError, OpKind, OperatorDescriptor,
    OperatorRegistry, StatefulKernel,
};
