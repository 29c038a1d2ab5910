use super::*;

#[test]
fn sentinel_indices_are_fixed() {
    assert_eq!(Idx::UNKNOWN.raw(), 0);
    assert_eq!(Idx::ALL.raw(), 1);
    assert_eq!(Idx::NO_TYPE.raw(), 2);
}

#[test]
fn sentinel_check() {
    assert!(Idx::UNKNOWN.is_sentinel());
    assert!(Idx::NO_TYPE.is_sentinel());
    assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_sentinel());
}

#[test]
fn debug_names_sentinels() {
    assert_eq!(format!("{:?}", Idx::UNKNOWN), "Idx::UNKNOWN");
    assert_eq!(format!("{:?}", Idx::from_raw(42)), "Idx(42)");
}
