#![forbid(unsafe_code)]
//! colplug-core: typed nullable columns, scalar types, coercion, and config.
//!
//! Pure data; operator logic lives in `colplug-operators` and evaluation in
//! `colplug-exec`. Columns are immutable: every transform builds a new one.

pub mod coerce;
pub mod column;
pub mod config;
pub mod error;
pub mod prelude;
pub mod schema;
