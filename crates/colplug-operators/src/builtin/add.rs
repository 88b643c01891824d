//! Element-wise sum. Inputs arrive already coerced to their common type.

use colplug_core::column::Scalar;
use colplug_core::error::{Error, Result};
use colplug_core::schema::DataType;

use super::binary;
use crate::traits::ElementwiseKernel;

#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl ElementwiseKernel for Add {
    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        let (lhs, rhs) = binary("add", args)?;
        colplug_core::coerce::common_type(lhs, rhs)
    }

    fn call(&self, args: &[Scalar]) -> Result<Scalar> {
        match binary("add", args)? {
            (Scalar::Int64(a), Scalar::Int64(b)) => a
                .checked_add(b)
                .map(Scalar::Int64)
                .ok_or_else(|| Error::Overflow {
                    context: format!("add({a}, {b})"),
                }),
            (Scalar::Float64(a), Scalar::Float64(b)) => Ok(Scalar::Float64(a + b)),
            (a, b) => Err(Error::Invariant(format!(
                "add received uncoerced operands {} and {}",
                a.data_type(),
                b.data_type()
            ))),
        }
    }
}
