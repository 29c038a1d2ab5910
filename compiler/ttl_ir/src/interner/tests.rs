use super::*;

#[test]
fn intern_and_lookup() {
    let interner = StringInterner::new();

    let array = interner.intern("Array");
    let object = interner.intern("Object");
    let array2 = interner.intern("Array");

    assert_eq!(array, array2);
    assert_ne!(array, object);
    assert_eq!(interner.lookup(array), "Array");
    assert_eq!(interner.lookup(object), "Object");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn keywords_are_pre_interned() {
    let interner = StringInterner::new();
    for keyword in Keyword::ALL {
        let name = interner.get(keyword.as_str());
        assert!(name.is_some(), "{} not pre-interned", keyword.as_str());
    }
    assert!(!interner.is_empty());
}

#[test]
fn get_does_not_insert() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("NotYetSeen"), None);
    assert_eq!(interner.len(), before);
}

#[test]
fn names_spread_over_shards() {
    let interner = StringInterner::new();
    let shards: std::collections::BTreeSet<usize> = (0..64)
        .map(|i| interner.intern(&format!("Param{i}")).shard())
        .collect();
    assert!(shards.len() > 1);
}

#[test]
fn names_resolve_back_after_many_inserts() {
    let interner = StringInterner::new();
    let names: Vec<Name> = (0..500).map(|i| interner.intern(&format!("U{i}"))).collect();
    for (i, name) in names.into_iter().enumerate() {
        assert_eq!(interner.lookup(name), format!("U{i}"));
    }
}

#[test]
fn shared_interner_clones_share_storage() {
    let interner = SharedInterner::new();
    let clone = interner.clone();

    let t = interner.intern("T");
    assert_eq!(clone.intern("T"), t);
    assert_eq!(clone.lookup(t), "T");
}

#[test]
fn concurrent_interning_agrees() {
    let interner = SharedInterner::new();
    let names: Vec<Vec<Name>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let interner = interner.clone();
                scope.spawn(move || {
                    (0..50)
                        .map(|i| interner.intern(&format!("T{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    for other in &names[1..] {
        assert_eq!(other, &names[0]);
    }
}
