use pretty_assertions::assert_eq;

use super::*;
use crate::StringInterner;

#[test]
fn builds_var_leaf() {
    let interner = StringInterner::new();
    let t = interner.intern("T");

    let mut arena = TypeExprArena::new();
    let id = arena.var(t);

    assert_eq!(arena.get(id), &TypeExprKind::Var(t));
    assert_eq!(arena.len(), 1);
}

#[test]
fn call_operands_keep_order() {
    let interner = StringInterner::new();
    let mut arena = TypeExprArena::new();

    let a = arena.var(interner.intern("A"));
    let b = arena.var(interner.intern("B"));
    let c = arena.var(interner.intern("C"));
    let union = arena.call(interner.intern("union"), &[a, b, c]);

    let TypeExprKind::Call { callee, args } = *arena.get(union) else {
        panic!("expected call node");
    };
    assert_eq!(interner.lookup(callee), "union");
    assert_eq!(arena.operands(args), &[a, b, c]);
}

#[test]
fn nested_calls_have_disjoint_operand_ranges() {
    let interner = StringInterner::new();
    let mut arena = TypeExprArena::new();
    let type_kw = interner.intern("type");

    let name = arena.str(interner.intern("Array"));
    let t = arena.var(interner.intern("T"));
    let inner = arena.call(type_kw, &[name, t]);
    let outer_name = arena.str(interner.intern("Promise"));
    let outer = arena.call(type_kw, &[outer_name, inner]);

    let TypeExprKind::Call { args, .. } = *arena.get(outer) else {
        panic!("expected call node");
    };
    assert_eq!(arena.operands(args), &[outer_name, inner]);

    let TypeExprKind::Call { args, .. } = *arena.get(inner) else {
        panic!("expected call node");
    };
    assert_eq!(arena.operands(args), &[name, t]);
}

#[test]
fn nullary_call_has_empty_range() {
    let interner = StringInterner::new();
    let mut arena = TypeExprArena::new();
    let id = arena.call(interner.intern("unknown"), &[]);

    let TypeExprKind::Call { args, .. } = *arena.get(id) else {
        panic!("expected call node");
    };
    assert!(args.is_empty());
    assert!(arena.operands(args).is_empty());
}

#[test]
fn lambda_points_at_body() {
    let interner = StringInterner::new();
    let mut arena = TypeExprArena::new();
    let x = interner.intern("x");
    let body = arena.var(x);
    let lambda = arena.lambda(x, body);

    assert_eq!(arena.get(lambda), &TypeExprKind::Lambda { param: x, body });
    assert_eq!(arena.get(lambda).describe(), "function");
}

#[test]
fn range_debug_format() {
    assert_eq!(format!("{:?}", ExprRange::new(4, 3)), "ExprRange(4..7)");
}
