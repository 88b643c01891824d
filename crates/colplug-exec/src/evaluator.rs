//! Evaluator: apply a registered operator to input columns.
//!
//! Steps per call:
//! - Resolve the (optionally namespace-qualified) name in the registry.
//! - Check the input count against the operator's arity.
//! - Elementwise: require equal input lengths, coerce, then run the scalar
//!   kernel per position. A null in any input makes that output slot null.
//! - Stateful: coerce, then hand the whole columns to the kernel.
//!
//! Inputs are consumed or borrowed, never mutated.

use std::sync::Arc;

use thiserror::Error;

use colplug_core::coerce::{cast, common_type_of};
use colplug_core::column::{Column, ColumnBuilder};
use colplug_core::config::EvalConfig;
use colplug_core::schema::DataType;

use colplug_operators::registry::OperatorRegistry;
use colplug_operators::traits::{
    Coercion, ElementwiseKernel, Kernel, OpError, OperatorDescriptor, StatefulKernel,
};

use crate::metrics::emit_span;

#[derive(Debug, Error, PartialEq)]
pub enum ExecError {
    #[error("operator '{operator}' expects {expected} input column(s), got {actual}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        actual: usize,
    },

    #[error("operator '{operator}' requires equal-length inputs, got lengths {lengths:?}")]
    LengthMismatch {
        operator: String,
        lengths: Vec<usize>,
    },

    #[error(transparent)]
    Registry(#[from] OpError),

    #[error(transparent)]
    Column(#[from] colplug_core::error::Error),
}

/// One operator application; consumed by a single `evaluate` call.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub operator_name: String,
    pub inputs: Vec<Column>,
}

impl EvaluationRequest {
    pub fn new(operator_name: impl Into<String>, inputs: Vec<Column>) -> Self {
        Self {
            operator_name: operator_name.into(),
            inputs,
        }
    }
}

/// Evaluator over a frozen registry. Cheap to clone and safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: Arc<OperatorRegistry>,
    cfg: EvalConfig,
}

impl Evaluator {
    pub fn new(registry: Arc<OperatorRegistry>, cfg: EvalConfig) -> Result<Self, ExecError> {
        cfg.validate()?;
        Ok(Self { registry, cfg })
    }

    /// Evaluator over the process-wide built-in registry with default config.
    pub fn with_builtins() -> Self {
        Self {
            registry: OperatorRegistry::global(),
            cfg: EvalConfig::default(),
        }
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EvalConfig {
        &self.cfg
    }

    /// Resolve a possibly namespace-qualified operator name.
    pub fn resolve(&self, operator_name: &str) -> Result<&OperatorDescriptor, ExecError> {
        Ok(self.registry.lookup(self.cfg.unqualify(operator_name))?)
    }

    /// Borrowing convenience over [`Evaluator::evaluate`].
    pub fn evaluate_op(&self, operator_name: &str, inputs: &[Column]) -> Result<Column, ExecError> {
        self.evaluate(EvaluationRequest::new(operator_name, inputs.to_vec()))
    }

    pub fn evaluate(&self, request: EvaluationRequest) -> Result<Column, ExecError> {
        let EvaluationRequest {
            operator_name,
            inputs,
        } = request;
        let desc = self.resolve(&operator_name)?;

        let expected = desc.arity.count();
        if inputs.len() != expected {
            return Err(ExecError::ArityMismatch {
                operator: desc.name.clone(),
                expected,
                actual: inputs.len(),
            });
        }

        let output = match &desc.kernel {
            Kernel::Elementwise(kernel) => {
                check_lengths(&desc.name, &inputs)?;
                let inputs = coerce_inputs(desc.coercion, inputs)?;
                eval_elementwise(kernel.as_ref(), &inputs)?
            }
            Kernel::Stateful(kernel) => {
                let inputs = coerce_inputs(desc.coercion, inputs)?;
                eval_stateful(&desc.name, kernel.as_ref(), &inputs)?
            }
        };

        if self.cfg.trace_evaluations {
            emit_span(
                "evaluate",
                &[
                    ("op", desc.name.clone()),
                    ("kind", desc.kind().to_string()),
                    ("rows", output.len().to_string()),
                    ("nulls", output.null_count().to_string()),
                    ("dtype", output.dtype().to_string()),
                ],
            );
        }

        Ok(output)
    }
}

fn check_lengths(operator: &str, inputs: &[Column]) -> Result<(), ExecError> {
    let lengths: Vec<usize> = inputs.iter().map(Column::len).collect();
    if lengths.windows(2).any(|w| w[0] != w[1]) {
        return Err(ExecError::LengthMismatch {
            operator: operator.to_string(),
            lengths,
        });
    }
    Ok(())
}

fn coerce_inputs(coercion: Coercion, inputs: Vec<Column>) -> Result<Vec<Column>, ExecError> {
    match coercion {
        Coercion::None => Ok(inputs),
        Coercion::Numeric => {
            let dtypes: Vec<DataType> = inputs.iter().map(Column::dtype).collect();
            let target = common_type_of(&dtypes)?;
            inputs
                .into_iter()
                .map(|col| {
                    if col.dtype() == target {
                        Ok(col)
                    } else {
                        Ok(cast(&col, target)?)
                    }
                })
                .collect()
        }
    }
}

fn eval_elementwise(
    kernel: &dyn ElementwiseKernel,
    inputs: &[Column],
) -> Result<Column, ExecError> {
    let dtypes: Vec<DataType> = inputs.iter().map(Column::dtype).collect();
    let out_type = kernel.return_type(&dtypes)?;
    let rows = inputs.first().map(Column::len).unwrap_or(0);

    let mut builder = ColumnBuilder::with_capacity(out_type, rows);
    let mut args = Vec::with_capacity(inputs.len());
    for row in 0..rows {
        args.clear();
        for col in inputs {
            match col.get(row)? {
                Some(v) => args.push(v),
                None => break,
            }
        }
        if args.len() == inputs.len() {
            builder.push(Some(kernel.call(&args)?))?;
        } else {
            builder.push(None)?;
        }
    }
    Ok(builder.finish())
}

fn eval_stateful(
    operator: &str,
    kernel: &dyn StatefulKernel,
    inputs: &[Column],
) -> Result<Column, ExecError> {
    let dtypes: Vec<DataType> = inputs.iter().map(Column::dtype).collect();
    let out_type = kernel.return_type(&dtypes)?;
    let output = kernel.call(inputs)?;

    let rows = inputs.first().map(Column::len).unwrap_or(0);
    if output.len() != rows || output.dtype() != out_type {
        return Err(colplug_core::error::Error::Invariant(format!(
            "stateful operator '{operator}' produced {} {} rows for {rows} {out_type} rows",
            output.len(),
            output.dtype(),
        ))
        .into());
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_is_checked_before_lengths() {
        let eval = Evaluator::with_builtins();
        let err = eval
            .evaluate_op("add", &[Column::from_i64(vec![Some(1)])])
            .unwrap_err();
        assert_eq!(
            err,
            ExecError::ArityMismatch {
                operator: "add".into(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[cfg(feature = "tracing")]
    mod traced {
        use super::*;
        use std::sync::atomic::{AtomicUsize, Ordering};

        /// Counts events emitted from this crate; spans are accepted and ignored.
        struct CountEvents(Arc<AtomicUsize>);

        impl tracing::Subscriber for CountEvents {
            fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
                true
            }
            fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
                tracing::span::Id::from_u64(1)
            }
            fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
            fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
            fn event(&self, event: &tracing::Event<'_>) {
                if event.metadata().target().starts_with("colplug_exec") {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
            fn enter(&self, _: &tracing::span::Id) {}
            fn exit(&self, _: &tracing::span::Id) {}
        }

        fn count_events(cfg: EvalConfig) -> usize {
            let counter = Arc::new(AtomicUsize::new(0));
            let eval = Evaluator::new(Arc::new(OperatorRegistry::with_builtins()), cfg).unwrap();
            let col = Column::from_i64(vec![Some(-2), None]);
            tracing::subscriber::with_default(CountEvents(Arc::clone(&counter)), || {
                eval.evaluate_op("abs_i64", &[col]).unwrap();
            });
            counter.load(Ordering::SeqCst)
        }

        #[test]
        fn trace_flag_controls_evaluation_events() {
            // One event per recorded key: op, kind, rows, nulls, dtype.
            assert_eq!(count_events(EvalConfig::default()), 5);
            assert_eq!(
                count_events(EvalConfig {
                    trace_evaluations: false,
                    ..EvalConfig::default()
                }),
                0
            );
        }
    }

    #[test]
    fn invalid_namespace_is_rejected() {
        let cfg = EvalConfig {
            namespace: "a.b".into(),
            ..EvalConfig::default()
        };
        assert!(matches!(
            Evaluator::new(OperatorRegistry::global(), cfg),
            Err(ExecError::Column(colplug_core::error::Error::Config(_)))
        ));
    }
}
