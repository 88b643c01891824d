#![forbid(unsafe_code)]
//! colplug-operators: operator descriptors, the registry, and built-in kernels.
//!
//! Design intent:
//! - Pure and synchronous; kernels are deterministic functions of their inputs.
//! - An operator is either elementwise (a per-position scalar kernel; the
//!   evaluator owns the row loop and null propagation) or stateful (the
//!   kernel sees whole columns).
//! - The registry is populated once at startup and read-only afterwards.

pub mod builtin;
pub mod registry;
pub mod traits;

pub use registry::OperatorRegistry;
pub use traits::{
    Arity, Coercion, ElementwiseKernel, Kernel, OpError, OpKind, OperatorDescriptor,
    StatefulKernel,
};
