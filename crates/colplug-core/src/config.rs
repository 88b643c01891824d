//! Evaluator configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Expression namespace the operators are exposed under. Operator names
    /// may be qualified with it (`mp.add`).
    pub namespace: String,

    /// Emit a trace event per evaluation (requires the `tracing` feature).
    pub trace_evaluations: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            namespace: "mp".to_string(),
            trace_evaluations: true,
        }
    }
}

impl EvalConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `COLPLUG_NAMESPACE`: operator namespace
    /// - `COLPLUG_TRACE_EVALUATIONS`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("COLPLUG_NAMESPACE") {
            cfg.namespace = s;
        }

        if let Ok(s) = std::env::var("COLPLUG_TRACE_EVALUATIONS") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.trace_evaluations = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(Error::Config("namespace must not be empty".into()));
        }
        if self.namespace.contains('.') {
            return Err(Error::Config(format!(
                "namespace '{}' must not contain '.'",
                self.namespace
            )));
        }
        Ok(())
    }

    /// Strip a leading `<namespace>.` qualifier from an operator name. The
    /// namespace matches case-insensitively, like operator names.
    pub fn unqualify<'a>(&self, name: &'a str) -> &'a str {
        let ns = self.namespace.as_str();
        match name.get(..ns.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(ns) => name[ns.len()..]
                .strip_prefix('.')
                .unwrap_or(name),
            _ => name,
        }
    }
}
