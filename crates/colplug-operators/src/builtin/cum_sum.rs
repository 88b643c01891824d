//! Running sum over a whole column.
//!
//! Null policy: a null input contributes 0 to the accumulator and its output
//! slot is null; accumulation continues past it. `[1, null, 3] -> [1, null, 4]`.

use colplug_core::column::{Column, ColumnValues};
use colplug_core::error::{Error, Result};
use colplug_core::schema::DataType;

use super::unary;
use crate::traits::StatefulKernel;

#[derive(Debug, Clone, Copy, Default)]
pub struct CumSum;

impl StatefulKernel for CumSum {
    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        match unary("cum_sum", args)? {
            dt if dt.is_numeric() => Ok(dt),
            other => Err(Error::UnsupportedType {
                context: "cum_sum".into(),
                dtype: other,
            }),
        }
    }

    fn call(&self, inputs: &[Column]) -> Result<Column> {
        let [input] = inputs else {
            return Err(Error::Invariant(format!(
                "cum_sum expects 1 input column, got {}",
                inputs.len()
            )));
        };
        let validity = input.validity();

        let values = match input.values() {
            ColumnValues::Int64(values) => {
                let mut acc: i64 = 0;
                let mut out = Vec::with_capacity(values.len());
                for (v, valid) in values.iter().zip(validity) {
                    if *valid {
                        acc = acc.checked_add(*v).ok_or_else(|| Error::Overflow {
                            context: format!("cum_sum({acc} + {v})"),
                        })?;
                    }
                    out.push(acc);
                }
                ColumnValues::Int64(out)
            }
            ColumnValues::Float64(values) => {
                let mut acc = 0.0_f64;
                let mut out = Vec::with_capacity(values.len());
                for (v, valid) in values.iter().zip(validity) {
                    if *valid {
                        acc += *v;
                    }
                    out.push(acc);
                }
                ColumnValues::Float64(out)
            }
            ColumnValues::Bool(_) => {
                return Err(Error::UnsupportedType {
                    context: "cum_sum".into(),
                    dtype: DataType::Bool,
                })
            }
        };

        Column::from_values(values, validity.to_vec())
    }
}
