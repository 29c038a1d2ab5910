use pretty_assertions::assert_eq;
use ttl_ir::StringInterner;

use super::*;

struct Fixture {
    interner: StringInterner,
    pool: Pool,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
            pool: Pool::new(),
        }
    }

    fn named(&self, name: &str) -> Idx {
        self.pool.named(self.interner.intern(name))
    }

    fn fmt(&self, idx: Idx) -> String {
        self.pool.format_type(idx, &self.interner)
    }
}

#[test]
fn sentinels_at_fixed_indices() {
    let pool = Pool::new();
    assert_eq!(pool.tag(Idx::UNKNOWN), Tag::Unknown);
    assert_eq!(pool.tag(Idx::ALL), Tag::All);
    assert_eq!(pool.tag(Idx::NO_TYPE), Tag::NoType);
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize);
}

#[test]
fn named_types_are_interned_once() {
    let f = Fixture::new();
    let a = f.named("Array");
    let b = f.named("Array");
    let c = f.named("Object");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(f.pool.data(a), TypeData::Named(f.interner.intern("Array")));
    assert!(f.pool.flags(a).contains(TypeFlags::IS_NAMED));
}

#[test]
fn union_normalizes_order_and_duplicates() {
    let f = Fixture::new();
    let s = f.named("string");
    let n = f.named("number");

    let ab = f.pool.union(&[s, n]);
    let ba = f.pool.union(&[n, s, n]);

    assert_eq!(ab, ba);
    assert_eq!(f.pool.tag(ab), Tag::Union);
    assert_eq!(f.pool.union_members(ab).len(), 2);
}

#[test]
fn union_flattens_nested_unions() {
    let f = Fixture::new();
    let a = f.named("A");
    let b = f.named("B");
    let c = f.named("C");

    let inner = f.pool.union(&[a, b]);
    let nested = f.pool.union(&[inner, c]);
    let flat = f.pool.union(&[a, b, c]);

    assert_eq!(nested, flat);
}

#[test]
fn union_sentinel_rules() {
    let f = Fixture::new();
    let a = f.named("A");

    assert_eq!(f.pool.union(&[a, Idx::UNKNOWN]), Idx::UNKNOWN);
    assert_eq!(f.pool.union(&[Idx::ALL, Idx::UNKNOWN]), Idx::UNKNOWN);
    assert_eq!(f.pool.union(&[a, Idx::ALL]), Idx::ALL);
    assert_eq!(f.pool.union(&[a, Idx::NO_TYPE]), a);
    assert_eq!(f.pool.union(&[Idx::NO_TYPE, Idx::NO_TYPE]), Idx::NO_TYPE);
    assert_eq!(f.pool.union(&[]), Idx::NO_TYPE);
    assert_eq!(f.pool.union(&[a, a]), a);
}

#[test]
fn union_members_views() {
    let f = Fixture::new();
    let a = f.named("A");
    let b = f.named("B");
    let ab = f.pool.union(&[a, b]);

    assert!(f.pool.union_members(Idx::NO_TYPE).is_empty());
    assert_eq!(f.pool.union_members(a).as_slice(), &[a]);
    let mut members = f.pool.union_members(ab);
    members.sort_unstable();
    let mut expected = [a, b];
    expected.sort_unstable();
    assert_eq!(members.as_slice(), &expected);
}

#[test]
fn applied_requires_named_base() {
    let f = Fixture::new();
    let array = f.named("Array");
    let s = f.named("string");

    let array_of_s = f.pool.applied(array, &[s]);
    assert_eq!(f.pool.tag(array_of_s), Tag::Applied);
    assert_eq!(f.pool.applied_base(array_of_s), Some(array));
    assert_eq!(f.pool.applied_args(array_of_s).as_slice(), &[s]);

    assert_eq!(f.pool.applied(array, &[]), array);
    assert_eq!(f.pool.applied(Idx::UNKNOWN, &[s]), Idx::UNKNOWN);
    assert_eq!(f.pool.applied_base(array), None);
    assert!(f.pool.applied_args(array).is_empty());
}

#[test]
fn unknown_flag_propagates_into_applied() {
    let f = Fixture::new();
    let array = f.named("Array");
    let s = f.named("string");

    let unknown_arg = f.pool.applied(array, &[Idx::UNKNOWN]);
    let known_arg = f.pool.applied(array, &[s]);

    assert!(f.pool.flags(unknown_arg).contains(TypeFlags::HAS_UNKNOWN));
    assert!(!f.pool.flags(known_arg).contains(TypeFlags::HAS_UNKNOWN));
}

#[test]
fn subtype_sentinels() {
    let f = Fixture::new();
    let a = f.named("A");

    assert!(f.pool.is_subtype(a, a));
    assert!(f.pool.is_subtype(a, Idx::ALL));
    assert!(f.pool.is_subtype(a, Idx::UNKNOWN));
    assert!(f.pool.is_subtype(Idx::UNKNOWN, a));
    assert!(f.pool.is_subtype(Idx::NO_TYPE, a));
    assert!(!f.pool.is_subtype(Idx::ALL, a));
    assert!(!f.pool.is_subtype(a, Idx::NO_TYPE));
}

#[test]
fn subtype_unions() {
    let f = Fixture::new();
    let a = f.named("A");
    let b = f.named("B");
    let c = f.named("C");
    let ab = f.pool.union(&[a, b]);
    let abc = f.pool.union(&[a, b, c]);

    assert!(f.pool.is_subtype(a, ab));
    assert!(f.pool.is_subtype(ab, abc));
    assert!(!f.pool.is_subtype(abc, ab));
    assert!(!f.pool.is_subtype(c, ab));
}

#[test]
fn subtype_templatized() {
    let f = Fixture::new();
    let array = f.named("Array");
    let s = f.named("string");
    let n = f.named("number");
    let array_s = f.pool.applied(array, &[s]);
    let array_n = f.pool.applied(array, &[n]);

    assert!(f.pool.is_subtype(array_s, array));
    assert!(!f.pool.is_subtype(array, array_s));
    assert!(!f.pool.is_subtype(array_s, array_n));
    assert!(f.pool.is_subtype(array_s, f.pool.applied(array, &[s])));
}

#[test]
fn subtype_unknown_template_argument_is_wildcard() {
    let f = Fixture::new();
    let array = f.named("Array");
    let map = f.named("Map");
    let s = f.named("string");
    let n = f.named("number");
    let array_s = f.pool.applied(array, &[s]);
    let array_u = f.pool.applied(array, &[Idx::UNKNOWN]);

    assert!(f.pool.is_subtype(array_s, array_u));
    assert!(f.pool.is_subtype(array_u, array_s));
    assert!(!f.pool.is_subtype(array_u, f.pool.applied(map, &[Idx::UNKNOWN])));

    // Nested arguments match through `?` too, but stay invariant otherwise.
    let map_s_array_s = f.pool.applied(map, &[s, array_s]);
    let map_s_array_u = f.pool.applied(map, &[s, array_u]);
    let map_n_array_u = f.pool.applied(map, &[n, array_u]);
    assert!(f.pool.is_subtype(map_s_array_s, map_s_array_u));
    assert!(!f.pool.is_subtype(map_s_array_s, map_n_array_u));
}

#[test]
fn subtype_all_is_only_below_top() {
    let f = Fixture::new();
    let a = f.named("A");
    let b = f.named("B");
    let ab = f.pool.union(&[a, b]);

    assert!(!f.pool.is_subtype(Idx::ALL, ab));
    assert!(!f.pool.is_subtype(ab, Idx::NO_TYPE));
    assert!(f.pool.is_subtype(Idx::ALL, Idx::UNKNOWN));
}

#[test]
fn formats_types() {
    let f = Fixture::new();
    let array = f.named("Array");
    let s = f.named("string");
    let array_s = f.pool.applied(array, &[s]);

    assert_eq!(f.fmt(Idx::UNKNOWN), "?");
    assert_eq!(f.fmt(Idx::ALL), "*");
    assert_eq!(f.fmt(Idx::NO_TYPE), "None");
    assert_eq!(f.fmt(array_s), "Array<string>");

    let union = f.pool.union(&[array_s, s]);
    let text = f.fmt(union);
    assert!(text == "(Array<string>|string)" || text == "(string|Array<string>)");
}

#[test]
fn shared_pool_interns_across_threads() {
    let interner = StringInterner::new();
    let names: Vec<_> = (0..8).map(|i| interner.intern(&format!("T{i}"))).collect();
    let pool = SharedPool::new();

    let results: Vec<Vec<Idx>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = pool.clone();
                let names = &names;
                scope.spawn(move || names.iter().map(|&n| pool.named(n)).collect::<Vec<_>>())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });

    for other in &results[1..] {
        assert_eq!(other, &results[0]);
    }
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize + names.len());
}
