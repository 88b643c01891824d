//! Registry: built-ins, custom operators, duplicate/unknown names.

use colplug_core::column::{Column, Scalar};
use colplug_core::error::{Error, Result};
use colplug_core::schema::DataType;
use colplug_operators::{
    Arity, Coercion, ElementwiseKernel, OpError, OpKind, OperatorDescriptor, OperatorRegistry,
};

struct Negate;

impl ElementwiseKernel for Negate {
    fn return_type(&self, args: &[DataType]) -> Result<DataType> {
        match args {
            [DataType::Float64] => Ok(DataType::Float64),
            [other] => Err(Error::UnsupportedType {
                context: "negate".into(),
                dtype: *other,
            }),
            _ => Err(Error::Invariant("negate is unary".into())),
        }
    }

    fn call(&self, args: &[Scalar]) -> Result<Scalar> {
        match args {
            [Scalar::Float64(v)] => Ok(Scalar::Float64(-v)),
            _ => Err(Error::Invariant("negate expects one Float64".into())),
        }
    }
}

#[test]
fn test_builtin_descriptors() {
    let reg = OperatorRegistry::with_builtins();
    assert_eq!(reg.len(), 5);

    let expected = [
        ("noop", Arity::Unary, OpKind::Elementwise, Coercion::None),
        ("abs_i64", Arity::Unary, OpKind::Elementwise, Coercion::None),
        ("abs_numeric", Arity::Unary, OpKind::Elementwise, Coercion::Numeric),
        ("add", Arity::Binary, OpKind::Elementwise, Coercion::Numeric),
        ("cum_sum", Arity::Unary, OpKind::Stateful, Coercion::None),
    ];
    for (name, arity, kind, coercion) in expected {
        let desc = reg.lookup(name).expect("builtin registered");
        assert_eq!(desc.name, name);
        assert_eq!(desc.arity, arity, "{name}");
        assert_eq!(desc.kind(), kind, "{name}");
        assert_eq!(desc.coercion, coercion, "{name}");
    }
}

#[test]
fn test_lookup_unknown() {
    let reg = OperatorRegistry::with_builtins();
    assert_eq!(
        reg.lookup("nonexistent_op").unwrap_err(),
        OpError::UnknownOperator("nonexistent_op".into())
    );
}

#[test]
fn test_register_duplicate_builtin_name() {
    let mut reg = OperatorRegistry::with_builtins();
    let err = reg
        .register(OperatorDescriptor::elementwise("ADD", Arity::Unary, Negate))
        .unwrap_err();
    assert_eq!(err, OpError::DuplicateOperator("add".into()));
    // The original descriptor survives.
    assert_eq!(reg.lookup("add").unwrap().arity, Arity::Binary);
}

#[test]
fn test_register_custom_operator() {
    let mut reg = OperatorRegistry::with_builtins();
    reg.register(OperatorDescriptor::elementwise("negate", Arity::Unary, Negate))
        .unwrap();
    assert_eq!(reg.len(), 6);
    assert!(reg.lookup("negate").unwrap().is_elementwise());
    assert!(reg.names().contains(&"negate".to_string()));

    let out_type = reg
        .lookup("negate")
        .unwrap()
        .kernel
        .return_type(&[Column::from_f64(vec![]).dtype()])
        .unwrap();
    assert_eq!(out_type, DataType::Float64);
}

#[test]
fn test_global_registry_is_shared() {
    let a = OperatorRegistry::global();
    let b = OperatorRegistry::global();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(a.names(), OperatorRegistry::with_builtins().names());
}
