//! Evaluator configuration loading and validation.

use colplug_core::config::EvalConfig;
use colplug_core::error::Error;

#[test]
fn test_defaults() {
    let cfg = EvalConfig::default();
    assert_eq!(cfg.namespace, "mp");
    assert!(cfg.trace_evaluations);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_from_json_fills_defaults() {
    let cfg = EvalConfig::from_json_str(r#"{"trace_evaluations": false}"#).unwrap();
    assert_eq!(cfg.namespace, "mp");
    assert!(!cfg.trace_evaluations);
}

#[test]
fn test_from_json_rejects_bad_namespace() {
    assert!(matches!(
        EvalConfig::from_json_str(r#"{"namespace": ""}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        EvalConfig::from_json_str(r#"{"namespace": "a.b"}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        EvalConfig::from_json_str("not json"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_from_env() {
    std::env::set_var("COLPLUG_NAMESPACE", "env_ns");
    std::env::set_var("COLPLUG_TRACE_EVALUATIONS", "false");
    let cfg = EvalConfig::from_env();
    std::env::remove_var("COLPLUG_NAMESPACE");
    std::env::remove_var("COLPLUG_TRACE_EVALUATIONS");

    assert_eq!(cfg.namespace, "env_ns");
    assert!(!cfg.trace_evaluations);
}

#[test]
fn test_unqualify() {
    let cfg = EvalConfig::default();
    assert_eq!(cfg.unqualify("mp.add"), "add");
    assert_eq!(cfg.unqualify("add"), "add");
    assert_eq!(cfg.unqualify("mpx.add"), "mpx.add");
    assert_eq!(cfg.unqualify("mp"), "mp");
    assert_eq!(cfg.unqualify("MP.add"), "add");
    assert_eq!(cfg.unqualify("Mp.cum_sum"), "cum_sum");
    assert_eq!(cfg.unqualify("MPX.add"), "MPX.add");
    assert_eq!(cfg.unqualify("é"), "é");
}
