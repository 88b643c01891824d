//! Numeric type coercion.
//!
//! Promotion lattice is `Int64 < Float64`. `Bool` is not numeric and never
//! coerces; binary arithmetic on it is rejected with `UnsupportedType`.

use crate::column::{Column, ColumnValues};
use crate::error::{Error, Result};
use crate::schema::DataType;

/// Least upper bound of two numeric types.
pub fn common_type(a: DataType, b: DataType) -> Result<DataType> {
    use DataType::*;
    match (a, b) {
        (Int64, Int64) => Ok(Int64),
        (Int64, Float64) | (Float64, Int64) | (Float64, Float64) => Ok(Float64),
        (Bool, _) => Err(Error::unsupported("numeric coercion", Bool)),
        (_, Bool) => Err(Error::unsupported("numeric coercion", Bool)),
    }
}

/// Fold `common_type` over any number of inputs. A single numeric type is its
/// own common type.
pub fn common_type_of(types: &[DataType]) -> Result<DataType> {
    let (first, rest) = types
        .split_first()
        .ok_or_else(|| Error::Invariant("common type of zero inputs".into()))?;
    if !first.is_numeric() {
        return Err(Error::unsupported("numeric coercion", *first));
    }
    rest.iter().try_fold(*first, |acc, t| common_type(acc, *t))
}

/// Cast a column to `target`.
///
/// Same-type casts clone. `Int64 -> Float64` is lossless for the purposes of
/// this engine and always succeeds; every other conversion is rejected.
pub fn cast(column: &Column, target: DataType) -> Result<Column> {
    let source = column.dtype();
    if source == target {
        return Ok(column.clone());
    }
    match (column.values(), target) {
        (ColumnValues::Int64(values), DataType::Float64) => Column::from_values(
            ColumnValues::Float64(values.iter().map(|v| *v as f64).collect()),
            column.validity().to_vec(),
        ),
        _ => Err(Error::unsupported(format!("cast to {target}"), source)),
    }
}
