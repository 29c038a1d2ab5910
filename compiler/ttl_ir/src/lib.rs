//! Intermediate representation for type transformation expressions.
//!
//! This crate is the contract between the annotation parser and the
//! evaluator in `ttl_eval`:
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers and literals
//! - [`TypeExprArena`]: flat expression tree addressed by [`TypeExprId`]
//! - [`Keyword`]: the closed operator vocabulary with its arities
//!
//! The parser only ever emits trees built from these pieces. The evaluator
//! never re-validates a tree beyond the keyword, arity and operand-shape
//! checks it needs in order to dispatch.

mod expr;
mod interner;
mod keyword;
mod name;

pub use expr::{ExprRange, TypeExprArena, TypeExprId, TypeExprKind};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use keyword::{Arity, Keyword};
pub use name::Name;
