use super::*;

#[test]
fn test_shallow_recursion() {
    fn factorial(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n <= 1 { 1 } else { n * factorial(n - 1) })
    }

    assert_eq!(factorial(10), 3_628_800);
}

#[test]
fn test_deep_recursion() {
    fn deep_recurse(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { deep_recurse(n - 1) + 1 })
    }

    // Would overflow a typical 8MB stack without growth
    assert_eq!(deep_recurse(100_000), 100_000);
}

#[test]
fn test_works_with_result_type() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}

#[test]
fn descend_within_limit() {
    let limit = DepthLimit::new(3);
    assert_eq!(limit.descend(0), Ok(1));
    assert_eq!(limit.descend(2), Ok(3));
}

#[test]
fn descend_past_limit_fails() {
    let limit = DepthLimit::new(3);
    assert_eq!(limit.descend(3), Err(DepthLimitExceeded { limit: 3 }));
    assert_eq!(limit.descend(10), Err(DepthLimitExceeded { limit: 3 }));
}

#[test]
fn zero_limit_rejects_everything() {
    let limit = DepthLimit::new(0);
    assert!(limit.descend(0).is_err());
}

#[test]
fn guarded_recursion_stops_at_limit() {
    fn walk(depth: usize, limit: DepthLimit) -> Result<usize, DepthLimitExceeded> {
        ensure_sufficient_stack(|| {
            let next = limit.descend(depth)?;
            walk(next, limit)
        })
    }

    let err = walk(0, DepthLimit::new(1_000));
    assert_eq!(err, Err(DepthLimitExceeded { limit: 1_000 }));
}

#[test]
fn error_message_names_limit() {
    let err = DepthLimitExceeded { limit: 64 };
    assert_eq!(err.to_string(), "recursion depth limit of 64 exceeded");
}
