use thiserror::Error;

use crate::schema::DataType;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("dimension mismatch: {values} values but {validity} validity flags")]
    DimensionMismatch { values: usize, validity: usize },

    #[error("index {index} out of range for column of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported type {dtype} for {context}")]
    UnsupportedType { context: String, dtype: DataType },

    #[error("integer overflow in {context}")]
    Overflow { context: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl Error {
    pub(crate) fn unsupported(context: impl Into<String>, dtype: DataType) -> Self {
        Error::UnsupportedType {
            context: context.into(),
            dtype,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
