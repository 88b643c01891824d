//! Convenient re-exports for downstream crates.

pub use crate::coerce::{cast, common_type, common_type_of};
pub use crate::column::{Column, ColumnBuilder, ColumnValues, Scalar};
pub use crate::config::EvalConfig;
pub use crate::error::{Error, Result};
pub use crate::schema::DataType;
