use super::*;

#[test]
fn ids_are_dense_in_first_seen_order() {
    let mut t = Interner::new();
    let a = t.intern("alpha");
    let b = t.intern("beta");
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(t.intern("alpha"), a);
    assert_eq!(t.len(), 2);
}

#[test]
fn resolve_and_lookup_round_trip() {
    let mut t = Interner::new();
    let id = t.intern("speed");
    assert_eq!(t.resolve(id).as_deref(), Some("speed"));
    assert_eq!(t.lookup("speed"), Some(id));
    assert_eq!(t.lookup("missing"), None);
}

#[test]
fn reset_forgets_everything() {
    let mut t = Interner::new();
    let id = t.intern("x");
    t.reset();
    assert!(t.is_empty());
    assert_eq!(t.resolve(id), None);
    assert_eq!(t.intern("y").index(), 0);
}

#[test]
fn global_table_is_stable_across_calls() {
    let a = intern("intern_test_global_name");
    let b = intern("intern_test_global_name");
    assert_eq!(a, b);
    assert_eq!(lookup("intern_test_global_name"), Some(a));
    assert_eq!(resolve(a).as_deref(), Some("intern_test_global_name"));
}

#[test]
fn global_table_is_shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| intern("intern_test_threaded")))
        .collect();
    let ids: Vec<Ident> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] == w[1]));
}
