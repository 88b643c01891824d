//! Built-in operators: `noop`, `abs_i64`, `abs_numeric`, `add`, `cum_sum`.

pub mod abs;
pub mod add;
pub mod cum_sum;
pub mod noop;

use colplug_core::error::{Error, Result};

use crate::traits::{Arity, Coercion, OperatorDescriptor};

pub fn descriptors() -> Vec<OperatorDescriptor> {
    vec![
        OperatorDescriptor::elementwise("noop", Arity::Unary, noop::Noop),
        OperatorDescriptor::elementwise("abs_i64", Arity::Unary, abs::AbsI64),
        OperatorDescriptor::elementwise("abs_numeric", Arity::Unary, abs::AbsNumeric)
            .with_coercion(Coercion::Numeric),
        OperatorDescriptor::elementwise("add", Arity::Binary, add::Add)
            .with_coercion(Coercion::Numeric),
        OperatorDescriptor::stateful("cum_sum", Arity::Unary, cum_sum::CumSum),
    ]
}

/// The single argument of a unary kernel.
pub(crate) fn unary<T: Copy>(op: &str, args: &[T]) -> Result<T> {
    match args {
        [only] => Ok(*only),
        _ => Err(Error::Invariant(format!(
            "{op} expects 1 argument, got {}",
            args.len()
        ))),
    }
}

/// Both arguments of a binary kernel.
pub(crate) fn binary<T: Copy>(op: &str, args: &[T]) -> Result<(T, T)> {
    match args {
        [lhs, rhs] => Ok((*lhs, *rhs)),
        _ => Err(Error::Invariant(format!(
            "{op} expects 2 arguments, got {}",
            args.len()
        ))),
    }
}
