use super::*;

fn call(r: &FunctionRegistry, name: &str, args: &[Value]) -> ExprResult<Value> {
    let def = r.resolve(name, args.len())?;
    (def.call)(args)
}

#[test]
fn arity_acceptance() {
    assert!(Arity::Exact(2).accepts(2));
    assert!(!Arity::Exact(2).accepts(3));
    assert!(Arity::AtLeast(1).accepts(5));
    assert!(!Arity::AtLeast(1).accepts(0));
}

#[test]
fn min_max_preserve_promoted_kind() {
    let r = FunctionRegistry::with_builtins();
    assert_eq!(
        call(&r, "max", &[Value::Integer(3), Value::Integer(9), Value::Integer(-1)]).unwrap(),
        Value::Integer(9)
    );
    assert_eq!(
        call(&r, "min", &[Value::Integer(3), Value::Double(2.5)]).unwrap(),
        Value::Double(2.5)
    );
    assert_eq!(
        call(&r, "max", &[Value::Integer(3), Value::Long(1)]).unwrap(),
        Value::Long(3)
    );
}

#[test]
fn clamp_and_abs() {
    let r = FunctionRegistry::with_builtins();
    let clamp = |x: i32| {
        call(
            &r,
            "clamp",
            &[Value::Integer(x), Value::Integer(0), Value::Integer(10)],
        )
    };
    assert_eq!(clamp(-5).unwrap(), Value::Integer(0));
    assert_eq!(clamp(5).unwrap(), Value::Integer(5));
    assert_eq!(clamp(50).unwrap(), Value::Integer(10));
    assert_eq!(call(&r, "abs", &[Value::Long(-7)]).unwrap(), Value::Long(7));
}

#[test]
fn transcendental_builtins_return_double() {
    let r = FunctionRegistry::with_builtins();
    assert_eq!(call(&r, "sqrt", &[Value::Integer(16)]).unwrap(), Value::Double(4.0));
    match call(&r, "pow", &[Value::Integer(2), Value::Float(3.0)]).unwrap() {
        Value::Double(x) => assert!((x - 8.0).abs() < 1e-12),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
        call(&r, "lerp", &[Value::Double(0.0), Value::Double(10.0), Value::Double(0.25)]).unwrap(),
        Value::Double(2.5)
    );
    assert_eq!(call(&r, "sin", &[Value::Integer(0)]).unwrap(), Value::Double(0.0));
}

#[test]
fn non_numeric_arguments_are_type_errors() {
    let r = FunctionRegistry::with_builtins();
    assert!(call(&r, "max", &[Value::string("a"), Value::Integer(1)]).unwrap_err().is_type());
    assert!(call(&r, "sqrt", &[Value::Boolean(true)]).unwrap_err().is_type());
}

#[test]
fn resolution_prefers_exact_arity() {
    let mut r = FunctionRegistry::new();
    r.register_pure("f", Arity::AtLeast(0), |_| Ok(Value::Integer(0)));
    r.register_pure("f", Arity::Exact(2), |_| Ok(Value::Integer(2)));
    assert_eq!(call(&r, "f", &[Value::Null, Value::Null]).unwrap(), Value::Integer(2));
    assert_eq!(call(&r, "f", &[Value::Null]).unwrap(), Value::Integer(0));
}

#[test]
fn unresolved_calls_are_type_errors() {
    let r = FunctionRegistry::with_builtins();
    assert!(r.resolve("nope", 1).unwrap_err().is_type());
    assert!(r.resolve("abs", 2).unwrap_err().is_type());
    assert!(r.contains("lerp"));
    assert!(!r.contains("nope"));
}

#[test]
fn impure_registration_is_flagged() {
    let mut r = FunctionRegistry::new();
    r.register_impure("tick", Arity::Exact(0), |_| Ok(Value::Integer(1)));
    assert!(!r.resolve("tick", 0).unwrap().pure);
}
