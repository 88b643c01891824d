//! Typed `mp` expression namespace.
//!
//! One method per built-in operator, so host bindings can call
//! `ns.add(&a, &b)` instead of building requests by name.

use colplug_core::column::Column;

use crate::evaluator::{EvaluationRequest, Evaluator, ExecError};

#[derive(Debug, Clone)]
pub struct Namespace {
    evaluator: Evaluator,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(Evaluator::with_builtins())
    }
}

impl Namespace {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    /// Namespace name, e.g. `mp`.
    pub fn name(&self) -> &str {
        &self.evaluator.config().namespace
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Whether `operator` runs position-by-position.
    pub fn is_elementwise(&self, operator: &str) -> Result<bool, ExecError> {
        Ok(self.evaluator.resolve(operator)?.is_elementwise())
    }

    pub fn noop(&self, expr: &Column) -> Result<Column, ExecError> {
        self.call("noop", vec![expr.clone()])
    }

    pub fn abs_i64(&self, expr: &Column) -> Result<Column, ExecError> {
        self.call("abs_i64", vec![expr.clone()])
    }

    pub fn abs_numeric(&self, expr: &Column) -> Result<Column, ExecError> {
        self.call("abs_numeric", vec![expr.clone()])
    }

    pub fn add(&self, expr: &Column, other: &Column) -> Result<Column, ExecError> {
        self.call("add", vec![expr.clone(), other.clone()])
    }

    pub fn cum_sum(&self, expr: &Column) -> Result<Column, ExecError> {
        self.call("cum_sum", vec![expr.clone()])
    }

    fn call(&self, symbol: &str, inputs: Vec<Column>) -> Result<Column, ExecError> {
        let qualified = format!("{}.{}", self.name(), symbol);
        self.evaluator
            .evaluate(EvaluationRequest::new(qualified, inputs))
    }
}
