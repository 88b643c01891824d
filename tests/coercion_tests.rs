//! Numeric promotion and casting.

use colplug_core::coerce::{cast, common_type, common_type_of};
use colplug_core::column::Column;
use colplug_core::error::Error;
use colplug_core::schema::DataType;

#[test]
fn test_common_type_lattice() {
    use DataType::*;
    assert_eq!(common_type(Int64, Int64).unwrap(), Int64);
    assert_eq!(common_type(Int64, Float64).unwrap(), Float64);
    assert_eq!(common_type(Float64, Int64).unwrap(), Float64);
    assert_eq!(common_type(Float64, Float64).unwrap(), Float64);
    assert!(matches!(
        common_type(Bool, Int64),
        Err(Error::UnsupportedType { dtype: Bool, .. })
    ));
    assert!(common_type(Float64, Bool).is_err());
}

#[test]
fn test_common_type_of_single_input() {
    assert_eq!(common_type_of(&[DataType::Int64]).unwrap(), DataType::Int64);
    assert!(common_type_of(&[DataType::Bool]).is_err());
    assert!(matches!(common_type_of(&[]), Err(Error::Invariant(_))));
}

#[test]
fn test_cast_int_to_float_keeps_validity() {
    let col = Column::from_i64(vec![Some(-2), None, Some(5)]);
    let out = cast(&col, DataType::Float64).unwrap();
    assert_eq!(out, Column::from_f64(vec![Some(-2.0), None, Some(5.0)]));
}

#[test]
fn test_cast_same_type_is_identity() {
    let col = Column::from_bool(vec![Some(false), None]);
    assert_eq!(cast(&col, DataType::Bool).unwrap(), col);
}

#[test]
fn test_cast_float_to_int_unsupported() {
    let col = Column::from_f64(vec![Some(1.0)]);
    assert!(matches!(
        cast(&col, DataType::Int64),
        Err(Error::UnsupportedType {
            dtype: DataType::Float64,
            ..
        })
    ));
}
