use super::*;

#[test]
fn only_unknown_propagates() {
    let flags = TypeFlags::IS_APPLIED | TypeFlags::HAS_UNKNOWN;
    assert_eq!(flags.propagated(), TypeFlags::HAS_UNKNOWN);
    assert_eq!(TypeFlags::IS_NAMED.propagated(), TypeFlags::empty());
}
