//! Identity. Accepts every dtype; nulls pass through untouched.

use colplug_core::column::Scalar;
use colplug_core::error::Result;
use colplug_core::schema::DataType;

use super::unary;
use crate::traits::ElementwiseKernel;

#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl ElementwiseKernel for Noop {
    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        unary("noop", args)
    }

    fn call(&self, args: &[Scalar]) -> Result<Scalar> {
        unary("noop", args)
    }
}
