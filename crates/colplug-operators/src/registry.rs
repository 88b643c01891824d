//! Operator registry: symbolic name -> `OperatorDescriptor`.
//!
//! Names are normalized to ASCII lowercase. The registry is populated before
//! any evaluation and only read afterwards; `register` takes `&mut self`, so
//! a registry shared behind an `Arc` is frozen.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::builtin;
use crate::traits::{OpError, OperatorDescriptor};

static GLOBAL: Lazy<Arc<OperatorRegistry>> =
    Lazy::new(|| Arc::new(OperatorRegistry::with_builtins()));

#[derive(Debug, Default, Clone)]
pub struct OperatorRegistry {
    ops: HashMap<String, OperatorDescriptor>,
}

impl OperatorRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `noop`, `abs_i64`, `abs_numeric`, `add`, `cum_sum`.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register_builtins()
            .expect("built-in operator names are unique");
        reg
    }

    /// Process-wide built-in registry, initialized on first use.
    pub fn global() -> Arc<OperatorRegistry> {
        Arc::clone(&*GLOBAL)
    }

    /// Add an operator. Fails if the (normalized) name is taken.
    pub fn register(&mut self, mut descriptor: OperatorDescriptor) -> Result<(), OpError> {
        let key = normalize(&descriptor.name);
        if self.ops.contains_key(&key) {
            return Err(OpError::DuplicateOperator(key));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            op = %key,
            arity = descriptor.arity.count(),
            kind = %descriptor.kind(),
            "registered operator"
        );
        descriptor.name = key.clone();
        self.ops.insert(key, descriptor);
        Ok(())
    }

    /// Add every built-in operator to this registry.
    pub fn register_builtins(&mut self) -> Result<(), OpError> {
        builtin::descriptors()
            .into_iter()
            .try_for_each(|desc| self.register(desc))
    }

    pub fn lookup(&self, name: &str) -> Result<&OperatorDescriptor, OpError> {
        self.ops
            .get(&normalize(name))
            .ok_or_else(|| OpError::UnknownOperator(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(&normalize(name))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ops.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
