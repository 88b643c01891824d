//! Absolute value kernels.
//!
//! `abs_i64` is monomorphic over Int64. `abs_numeric` dispatches on the
//! runtime dtype and keeps it: Int64 in, Int64 out; Float64 in, Float64 out.
//! `i64::MIN` has no positive counterpart and is reported as overflow.

use colplug_core::column::Scalar;
use colplug_core::error::{Error, Result};
use colplug_core::schema::DataType;

use super::unary;
use crate::traits::ElementwiseKernel;

#[derive(Debug, Clone, Copy, Default)]
pub struct AbsI64;

#[derive(Debug, Clone, Copy, Default)]
pub struct AbsNumeric;

fn checked_abs(op: &str, v: i64) -> Result<i64> {
    v.checked_abs().ok_or_else(|| Error::Overflow {
        context: format!("{op}({v})"),
    })
}

impl ElementwiseKernel for AbsI64 {
    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        match unary("abs_i64", args)? {
            DataType::Int64 => Ok(DataType::Int64),
            other => Err(Error::UnsupportedType {
                context: "abs_i64".into(),
                dtype: other,
            }),
        }
    }

    fn call(&self, args: &[Scalar]) -> Result<Scalar> {
        match unary("abs_i64", args)? {
            Scalar::Int64(v) => Ok(Scalar::Int64(checked_abs("abs_i64", v)?)),
            other => Err(Error::UnsupportedType {
                context: "abs_i64".into(),
                dtype: other.data_type(),
            }),
        }
    }
}

impl ElementwiseKernel for AbsNumeric {
    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        match unary("abs_numeric", args)? {
            dt if dt.is_numeric() => Ok(dt),
            other => Err(Error::UnsupportedType {
                context: "abs_numeric".into(),
                dtype: other,
            }),
        }
    }

    fn call(&self, args: &[Scalar]) -> Result<Scalar> {
        match unary("abs_numeric", args)? {
            Scalar::Int64(v) => Ok(Scalar::Int64(checked_abs("abs_numeric", v)?)),
            Scalar::Float64(v) => Ok(Scalar::Float64(v.abs())),
            Scalar::Bool(_) => Err(Error::UnsupportedType {
                context: "abs_numeric".into(),
                dtype: DataType::Bool,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_i64_min_overflows() {
        let err = AbsI64.call(&[Scalar::Int64(i64::MIN)]).unwrap_err();
        assert!(matches!(err, Error::Overflow { .. }));
        assert_eq!(AbsI64.call(&[Scalar::Int64(-7)]).unwrap(), Scalar::Int64(7));
    }

    #[test]
    fn abs_numeric_keeps_dtype() {
        assert_eq!(
            AbsNumeric.call(&[Scalar::Float64(-2.5)]).unwrap(),
            Scalar::Float64(2.5)
        );
        assert_eq!(
            AbsNumeric.return_type(&[DataType::Float64]).unwrap(),
            DataType::Float64
        );
        assert!(AbsNumeric.return_type(&[DataType::Bool]).is_err());
    }
}
