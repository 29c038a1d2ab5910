//! Fatal evaluation errors.
//!
//! Only two things abort an evaluation: a tree whose shape the evaluator does
//! not understand (a parser/evaluator contract break) and a tree nested past
//! the configured depth. An unbound type variable or undeclared type name is
//! never an error; it resolves to `?`.

use std::fmt;

use ttl_ir::{Arity, Keyword};
use ttl_stack::DepthLimitExceeded;

/// Literal or function shape an operand is required to have.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    StringLiteral,
    IntegerLiteral,
    Function,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::StringLiteral => f.write_str("string literal"),
            OperandKind::IntegerLiteral => f.write_str("integer literal"),
            OperandKind::Function => f.write_str("function"),
        }
    }
}

/// Where an expression appears: as a type or as a condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Type,
    Predicate,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Type => f.write_str("type expression"),
            Position::Predicate => f.write_str("boolean expression"),
        }
    }
}

/// Error aborting one type transformation evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A call names an operator outside the vocabulary.
    #[error("unrecognized type transformation operator `{name}`")]
    UnknownOperator { name: String },

    /// An operator received the wrong number of operands.
    #[error("`{keyword}` expects {expected} operand(s), found {found}")]
    WrongArity {
        keyword: Keyword,
        expected: Arity,
        found: usize,
    },

    /// An operand is not the literal or function the operator requires.
    /// `position` is 1-based.
    #[error("operand {position} of `{keyword}` must be a {expected}")]
    OperandShape {
        keyword: Keyword,
        position: usize,
        expected: OperandKind,
    },

    /// A predicate used as a type, or a type operator used as a condition.
    #[error("`{keyword}` cannot be used as a {expected}")]
    Misplaced { keyword: Keyword, expected: Position },

    /// A literal, function or variable where it cannot be evaluated.
    #[error("{found} cannot be used as a {expected}")]
    UnexpectedNode {
        found: &'static str,
        expected: Position,
    },

    /// Nesting went past the configured maximum depth.
    #[error("type transformation exceeded the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

impl TransformError {
    /// Whether the tree itself is malformed for this evaluator.
    pub fn is_contract_violation(&self) -> bool {
        !self.is_resource_exhaustion()
    }

    /// Whether the evaluation ran out of depth budget.
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, TransformError::DepthExceeded { .. })
    }
}

impl From<DepthLimitExceeded> for TransformError {
    fn from(err: DepthLimitExceeded) -> Self {
        TransformError::DepthExceeded { limit: err.limit }
    }
}
