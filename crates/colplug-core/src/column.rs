//! Typed, nullable, immutable columns.
//!
//! A `Column` pairs a typed value buffer with a validity mask of the same
//! length (`true` = present). The value stored under a null slot is
//! unspecified and never observable through `get`/`iter`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::DataType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int64(i64),
    Float64(f64),
    Bool(bool),
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Int64(_) => DataType::Int64,
            Scalar::Float64(_) => DataType::Float64,
            Scalar::Bool(_) => DataType::Bool,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float64(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// Typed value buffer backing a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
}

impl ColumnValues {
    pub fn data_type(&self) -> DataType {
        match self {
            ColumnValues::Int64(_) => DataType::Int64,
            ColumnValues::Float64(_) => DataType::Float64,
            ColumnValues::Bool(_) => DataType::Bool,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int64(v) => v.len(),
            ColumnValues::Float64(v) => v.len(),
            ColumnValues::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Caller guarantees `idx < len`.
    fn scalar_at(&self, idx: usize) -> Scalar {
        match self {
            ColumnValues::Int64(v) => Scalar::Int64(v[idx]),
            ColumnValues::Float64(v) => Scalar::Float64(v[idx]),
            ColumnValues::Bool(v) => Scalar::Bool(v[idx]),
        }
    }
}

/// Immutable typed column with a validity mask.
///
/// There are no mutating methods; operators always build a new column
/// (usually through [`ColumnBuilder`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ColumnRepr", into = "ColumnRepr")]
pub struct Column {
    values: ColumnValues,
    validity: Vec<bool>,
}

#[derive(Serialize, Deserialize)]
struct ColumnRepr {
    values: ColumnValues,
    validity: Vec<bool>,
}

impl TryFrom<ColumnRepr> for Column {
    type Error = Error;

    fn try_from(repr: ColumnRepr) -> Result<Self> {
        Column::from_values(repr.values, repr.validity)
    }
}

impl From<Column> for ColumnRepr {
    fn from(col: Column) -> Self {
        ColumnRepr {
            values: col.values,
            validity: col.validity,
        }
    }
}

impl Column {
    /// Build a column from loose scalars.
    ///
    /// Every scalar must match `dtype`, including those sitting under a null
    /// slot.
    pub fn try_new(dtype: DataType, values: Vec<Scalar>, validity: Vec<bool>) -> Result<Self> {
        if values.len() != validity.len() {
            return Err(Error::DimensionMismatch {
                values: values.len(),
                validity: validity.len(),
            });
        }

        let context = format!("value in {dtype} column");
        let buffer = match dtype {
            DataType::Int64 => ColumnValues::Int64(
                values
                    .iter()
                    .map(|s| s.as_i64().ok_or_else(|| Error::unsupported(&context, s.data_type())))
                    .collect::<Result<_>>()?,
            ),
            DataType::Float64 => ColumnValues::Float64(
                values
                    .iter()
                    .map(|s| s.as_f64().ok_or_else(|| Error::unsupported(&context, s.data_type())))
                    .collect::<Result<_>>()?,
            ),
            DataType::Bool => ColumnValues::Bool(
                values
                    .iter()
                    .map(|s| s.as_bool().ok_or_else(|| Error::unsupported(&context, s.data_type())))
                    .collect::<Result<_>>()?,
            ),
        };

        Ok(Self {
            values: buffer,
            validity,
        })
    }

    /// Build a column from an already-typed buffer.
    pub fn from_values(values: ColumnValues, validity: Vec<bool>) -> Result<Self> {
        if values.len() != validity.len() {
            return Err(Error::DimensionMismatch {
                values: values.len(),
                validity: validity.len(),
            });
        }
        Ok(Self { values, validity })
    }

    pub fn from_i64(values: Vec<Option<i64>>) -> Self {
        let (values, validity) = split_options(values);
        Self {
            values: ColumnValues::Int64(values),
            validity,
        }
    }

    pub fn from_f64(values: Vec<Option<f64>>) -> Self {
        let (values, validity) = split_options(values);
        Self {
            values: ColumnValues::Float64(values),
            validity,
        }
    }

    pub fn from_bool(values: Vec<Option<bool>>) -> Self {
        let (values, validity) = split_options(values);
        Self {
            values: ColumnValues::Bool(values),
            validity,
        }
    }

    pub fn dtype(&self) -> DataType {
        self.values.data_type()
    }

    pub fn len(&self) -> usize {
        self.validity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validity.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.validity.iter().filter(|v| !**v).count()
    }

    /// `false` for null slots and for out-of-range indices.
    pub fn is_valid(&self, index: usize) -> bool {
        self.validity.get(index).copied().unwrap_or(false)
    }

    pub fn validity(&self) -> &[bool] {
        &self.validity
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    /// Value at `index`, `None` when the slot is null.
    pub fn get(&self, index: usize) -> Result<Option<Scalar>> {
        match self.validity.get(index) {
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            }),
            Some(false) => Ok(None),
            Some(true) => Ok(Some(self.values.scalar_at(index))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Scalar>> + '_ {
        self.validity
            .iter()
            .enumerate()
            .map(|(i, valid)| valid.then(|| self.values.scalar_at(i)))
    }

    pub fn i64_values(&self) -> Option<&[i64]> {
        match &self.values {
            ColumnValues::Int64(v) => Some(v),
            _ => None,
        }
    }

    pub fn f64_values(&self) -> Option<&[f64]> {
        match &self.values {
            ColumnValues::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn bool_values(&self) -> Option<&[bool]> {
        match &self.values {
            ColumnValues::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// Two columns are equal when dtype, validity, and the values at valid
/// positions agree. Null slots compare equal regardless of their payload, and
/// NaN equals NaN so equality stays reflexive.
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.dtype() == other.dtype()
            && self.validity == other.validity
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| match (a, b) {
                    (Some(Scalar::Float64(x)), Some(Scalar::Float64(y))) => {
                        x == y || (x.is_nan() && y.is_nan())
                    }
                    (a, b) => a == b,
                })
    }
}

fn split_options<T: Default>(values: Vec<Option<T>>) -> (Vec<T>, Vec<bool>) {
    let mut out = Vec::with_capacity(values.len());
    let mut validity = Vec::with_capacity(values.len());
    for v in values {
        validity.push(v.is_some());
        out.push(v.unwrap_or_default());
    }
    (out, validity)
}

/// Append-only builder used by operators to produce a new column.
#[derive(Debug)]
pub struct ColumnBuilder {
    values: ColumnValues,
    validity: Vec<bool>,
}

impl ColumnBuilder {
    pub fn with_capacity(dtype: DataType, capacity: usize) -> Self {
        let values = match dtype {
            DataType::Int64 => ColumnValues::Int64(Vec::with_capacity(capacity)),
            DataType::Float64 => ColumnValues::Float64(Vec::with_capacity(capacity)),
            DataType::Bool => ColumnValues::Bool(Vec::with_capacity(capacity)),
        };
        Self {
            values,
            validity: Vec::with_capacity(capacity),
        }
    }

    pub fn dtype(&self) -> DataType {
        self.values.data_type()
    }

    pub fn len(&self) -> usize {
        self.validity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validity.is_empty()
    }

    /// Append one slot. A scalar of the wrong type is an operator bug and
    /// surfaces as `Error::Invariant`.
    pub fn push(&mut self, value: Option<Scalar>) -> Result<()> {
        match (&mut self.values, value) {
            (ColumnValues::Int64(v), None) => v.push(0),
            (ColumnValues::Float64(v), None) => v.push(0.0),
            (ColumnValues::Bool(v), None) => v.push(false),
            (ColumnValues::Int64(v), Some(Scalar::Int64(x))) => v.push(x),
            (ColumnValues::Float64(v), Some(Scalar::Float64(x))) => v.push(x),
            (ColumnValues::Bool(v), Some(Scalar::Bool(x))) => v.push(x),
            (values, Some(other)) => {
                return Err(Error::Invariant(format!(
                    "cannot append {} value to {} column",
                    other.data_type(),
                    values.data_type()
                )))
            }
        }
        self.validity.push(value.is_some());
        Ok(())
    }

    pub fn finish(self) -> Column {
        Column {
            values: self.values,
            validity: self.validity,
        }
    }
}
