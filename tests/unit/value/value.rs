use super::*;

#[test]
fn kinds_and_families() {
    assert_eq!(Value::from(1).value_type(), ValueType::Integer);
    assert_eq!(Value::from(1i64).value_type(), ValueType::Long);
    assert_eq!(Value::from(1.0f32).value_type(), ValueType::Float);
    assert_eq!(Value::from(Decimal::ONE).value_type(), ValueType::Decimal);
    assert!(ValueType::Decimal.is_float_family());
    assert!(ValueType::Long.is_integer_family());
    assert!(!ValueType::Boolean.is_numeric());
    assert!(!Value::Null.is_numeric());
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn as_bool_names_the_operator() {
    assert!(Value::Boolean(true).as_bool("&&").unwrap());
    let e = Value::Integer(1).as_bool("&&").unwrap_err();
    assert!(e.is_type());
    assert_eq!(e.to_string(), "type error: '&&' expects Boolean, got Integer");
}

#[test]
fn as_f64_widens_numeric_kinds() {
    assert_eq!(Value::Integer(3).as_f64().unwrap(), 3.0);
    assert_eq!(Value::Float(0.5).as_f64().unwrap(), 0.5);
    assert_eq!(Value::Decimal(Decimal::new(25, 1)).as_f64().unwrap(), 2.5);
    assert!(Value::string("x").as_f64().unwrap_err().is_type());
}

#[test]
fn display() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::from("hi").to_string(), "hi");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(ValueType::Double.to_string(), "Double");
}

#[test]
fn value_type_serializes_by_name() {
    let s = serde_json::to_string(&ValueType::Long).unwrap();
    assert_eq!(s, "\"Long\"");
}

#[test]
fn string_clones_share_storage() {
    let a = Value::string("shared");
    let b = a.clone();
    match (&a, &b) {
        (Value::String(x), Value::String(y)) => assert!(Arc::ptr_eq(x, y)),
        _ => unreachable!(),
    }
}
