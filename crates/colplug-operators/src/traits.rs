//! Operator descriptor + kernel traits.
//!
//! The evaluator resolves a name to an `OperatorDescriptor`, checks its
//! `Arity`, applies its `Coercion` policy, then dispatches on the `Kernel`
//! variant.

use std::fmt;
use std::sync::Arc;

use colplug_core::column::{Column, Scalar};
use colplug_core::error::Result;
use colplug_core::schema::DataType;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("operator '{0}' is already registered")]
    DuplicateOperator(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Number of input columns an operator of this arity takes.
    pub fn count(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Applied independently per row position.
    Elementwise,
    /// Applied to the column as a whole; may carry state across positions.
    Stateful,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Elementwise => f.write_str("elementwise"),
            OpKind::Stateful => f.write_str("stateful"),
        }
    }
}

/// How the evaluator normalizes input types before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Inputs are passed through unchanged.
    #[default]
    None,
    /// Inputs are cast to their common numeric type; `Bool` is rejected.
    Numeric,
}

/// Per-position kernel.
///
/// `call` only sees positions where every input is non-null; the evaluator
/// writes null for every other position.
pub trait ElementwiseKernel: Send + Sync {
    /// Output type for the given (already coerced) input types.
    fn return_type(&self, args: &[DataType]) -> Result<DataType>;

    fn call(&self, args: &[Scalar]) -> Result<Scalar>;
}

/// Whole-column kernel. The output must have the same length as the input.
pub trait StatefulKernel: Send + Sync {
    fn return_type(&self, args: &[DataType]) -> Result<DataType>;

    fn call(&self, inputs: &[Column]) -> Result<Column>;
}

#[derive(Clone)]
pub enum Kernel {
    Elementwise(Arc<dyn ElementwiseKernel>),
    Stateful(Arc<dyn StatefulKernel>),
}

impl Kernel {
    pub fn kind(&self) -> OpKind {
        match self {
            Kernel::Elementwise(_) => OpKind::Elementwise,
            Kernel::Stateful(_) => OpKind::Stateful,
        }
    }

    pub fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        match self {
            Kernel::Elementwise(k) => k.return_type(args),
            Kernel::Stateful(k) => k.return_type(args),
        }
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kernel").field(&self.kind()).finish()
    }
}

/// Registry entry: everything the evaluator needs to run an operator.
#[derive(Debug, Clone)]
pub struct OperatorDescriptor {
    /// Unique registry key.
    pub name: String,
    pub arity: Arity,
    pub coercion: Coercion,
    pub kernel: Kernel,
}

impl OperatorDescriptor {
    pub fn elementwise(
        name: impl Into<String>,
        arity: Arity,
        kernel: impl ElementwiseKernel + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            coercion: Coercion::None,
            kernel: Kernel::Elementwise(Arc::new(kernel)),
        }
    }

    pub fn stateful(
        name: impl Into<String>,
        arity: Arity,
        kernel: impl StatefulKernel + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            coercion: Coercion::None,
            kernel: Kernel::Stateful(Arc::new(kernel)),
        }
    }

    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = coercion;
        self
    }

    pub fn kind(&self) -> OpKind {
        self.kernel.kind()
    }

    pub fn is_elementwise(&self) -> bool {
        self.kind() == OpKind::Elementwise
    }
}
