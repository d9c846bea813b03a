use super::*;

#[test]
fn promotion_table() {
    use ValueType::*;
    assert_eq!(promote(Integer, Integer).unwrap(), Integer);
    assert_eq!(promote(Integer, Long).unwrap(), Long);
    assert_eq!(promote(Float, Double).unwrap(), Double);
    assert_eq!(promote(Long, Float).unwrap(), Float);
    assert_eq!(promote(Double, Integer).unwrap(), Double);
    assert_eq!(promote(Integer, Decimal).unwrap(), Decimal);
    assert!(promote(Decimal, Double).unwrap_err().is_type());
    assert!(promote(Boolean, Integer).unwrap_err().is_type());
}

#[test]
fn integer_arithmetic_is_checked() {
    let max = Value::Integer(i32::MAX);
    let one = Value::Integer(1);
    assert!(arith(ArithOp::Add, &max, &one).unwrap_err().is_runtime());
    assert_eq!(
        arith(ArithOp::Add, &max, &Value::Long(1)).unwrap(),
        Value::Long(i64::from(i32::MAX) + 1)
    );
    assert_eq!(
        arith(ArithOp::Div, &Value::Integer(7), &Value::Integer(2)).unwrap(),
        Value::Integer(3)
    );
    assert_eq!(
        arith(ArithOp::Mod, &Value::Integer(-7), &Value::Integer(3)).unwrap(),
        Value::Integer(-1)
    );
}

#[test]
fn division_by_zero() {
    let e = arith(ArithOp::Div, &Value::Integer(1), &Value::Integer(0)).unwrap_err();
    assert!(e.is_runtime());
    let e = arith(ArithOp::Mod, &Value::Long(1), &Value::Long(0)).unwrap_err();
    assert!(e.is_runtime());
    let e = arith(ArithOp::Div, &Value::Decimal(Decimal::ONE), &Value::Decimal(Decimal::ZERO))
        .unwrap_err();
    assert!(e.is_runtime());
    match arith(ArithOp::Div, &Value::Double(1.0), &Value::Double(0.0)).unwrap() {
        Value::Double(x) => assert!(x.is_infinite()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn mixed_families_promote_to_float_kind() {
    assert_eq!(
        arith(ArithOp::Mul, &Value::Integer(2), &Value::Float(1.5)).unwrap(),
        Value::Float(3.0)
    );
    assert_eq!(
        arith(ArithOp::Add, &Value::Long(2), &Value::Decimal(Decimal::new(15, 1))).unwrap(),
        Value::Decimal(Decimal::new(35, 1))
    );
}

#[test]
fn non_numeric_arithmetic_is_type_error() {
    let e = arith(ArithOp::Add, &Value::string("a"), &Value::Integer(1)).unwrap_err();
    assert!(e.is_type());
    assert!(e.to_string().contains("'+'"));
}

#[test]
fn float_equality_is_approximate() {
    let a = arith(ArithOp::Add, &Value::Double(0.1), &Value::Double(0.2)).unwrap();
    assert!(compare(CompareOp::Eq, &a, &Value::Double(0.3)).unwrap());
    assert!(!compare(CompareOp::Ne, &a, &Value::Double(0.3)).unwrap());
    assert!(compare(CompareOp::Eq, &Value::Integer(3), &Value::Double(3.0)).unwrap());
}

#[test]
fn ordering_and_nan() {
    assert!(compare(CompareOp::Lt, &Value::Integer(1), &Value::Long(2)).unwrap());
    assert!(compare(CompareOp::Ge, &Value::Double(2.0), &Value::Integer(2)).unwrap());
    let nan = Value::Double(f64::NAN);
    assert!(!compare(CompareOp::Lt, &nan, &Value::Double(1.0)).unwrap());
    assert!(!compare(CompareOp::Eq, &nan, &nan).unwrap());
    assert!(compare(CompareOp::Ne, &nan, &nan).unwrap());
}

#[test]
fn strings_booleans_and_null() {
    assert!(compare(CompareOp::Lt, &Value::string("abc"), &Value::string("abd")).unwrap());
    assert!(compare(CompareOp::Eq, &Value::Boolean(true), &Value::Boolean(true)).unwrap());
    assert!(
        compare(CompareOp::Lt, &Value::Boolean(false), &Value::Boolean(true))
            .unwrap_err()
            .is_type()
    );
    assert!(compare(CompareOp::Eq, &Value::Null, &Value::Null).unwrap());
    assert!(compare(CompareOp::Ne, &Value::Null, &Value::Integer(0)).unwrap());
    assert!(compare(CompareOp::Eq, &Value::string("1"), &Value::Integer(1)).unwrap_err().is_type());
}

#[test]
fn negate_preserves_kind_and_checks_overflow() {
    assert_eq!(negate(&Value::Long(5)).unwrap(), Value::Long(-5));
    assert_eq!(negate(&Value::Float(1.5)).unwrap(), Value::Float(-1.5));
    assert!(negate(&Value::Integer(i32::MIN)).unwrap_err().is_runtime());
    assert!(negate(&Value::Boolean(true)).unwrap_err().is_type());
}

#[test]
fn abs_and_convert() {
    assert_eq!(abs(&Value::Integer(-3)).unwrap(), Value::Integer(3));
    assert_eq!(abs(&Value::Double(-0.5)).unwrap(), Value::Double(0.5));
    assert_eq!(convert(&Value::Integer(2), ValueType::Double).unwrap(), Value::Double(2.0));
    assert_eq!(convert(&Value::Integer(2), ValueType::Long).unwrap(), Value::Long(2));
    assert!(convert(&Value::Double(2.0), ValueType::Integer).unwrap_err().is_type());
    assert!(convert(&Value::Float(2.0), ValueType::Decimal).unwrap_err().is_type());
}
