use super::*;

#[test]
fn insert_and_read_by_name() {
    let mut vars = Variables::new();
    assert!(vars.is_empty());
    vars.insert("variables_test_speed", 2.5);
    assert_eq!(vars.get_named("variables_test_speed"), Some(&Value::Double(2.5)));
    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get_named("variables_test_unbound"), None);
}

#[test]
fn set_through_the_trait_rebinds() {
    let mut vars = Variables::new();
    let id = intern::intern("variables_test_counter");
    vars.set(id, Value::Integer(1)).unwrap();
    vars.set(id, Value::Integer(2)).unwrap();
    assert_eq!(VariableStore::get(&vars, id), Some(&Value::Integer(2)));
    assert_eq!(vars.remove("variables_test_counter"), Some(Value::Integer(2)));
    assert!(vars.is_empty());
}

#[test]
fn read_only_view_rejects_writes() {
    let mut vars = Variables::new();
    vars.insert("variables_test_ro", true);
    let id = intern::intern("variables_test_ro");
    let mut view = ReadOnly(&vars);
    assert_eq!(view.get(id), Some(&Value::Boolean(true)));
    assert!(view.set(id, Value::Null).unwrap_err().is_runtime());
}

#[test]
fn empty_scope_is_empty() {
    let mut scope = EmptyScope;
    let id = intern::intern("variables_test_empty");
    assert_eq!(scope.get(id), None);
    assert!(scope.set(id, Value::Null).is_err());
}
