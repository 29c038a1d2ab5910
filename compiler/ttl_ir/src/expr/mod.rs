//! Flat expression tree for type transformation expressions.
//!
//! Nodes live in a [`TypeExprArena`] and refer to their children by
//! [`TypeExprId`]. Operand lists are stored contiguously and addressed by
//! [`ExprRange`].

use std::fmt;

use crate::Name;

/// Index into a [`TypeExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeExprId(u32);

impl TypeExprId {
    /// Create from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeExprId(index)
    }

    /// Position in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeExprId({})", self.0)
    }
}

/// Range of operands in the arena's operand list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    /// Empty range.
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ExprRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for ExprRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExprRange({}..{})",
            self.start,
            self.start + u32::from(self.len)
        )
    }
}

/// One node of a type transformation expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExprKind {
    /// Type variable reference, resolved against the environment: `T`.
    Var(Name),
    /// String literal operand: `'Array'`.
    Str(Name),
    /// Integer literal operand: `0`.
    Int(u32),
    /// Operator application: `keyword(args...)`.
    ///
    /// `callee` is whatever identifier the parser saw; the evaluator maps it
    /// to a [`Keyword`](crate::Keyword) and rejects anything else.
    Call { callee: Name, args: ExprRange },
    /// Single-parameter function operand: `(x) => body`.
    Lambda { param: Name, body: TypeExprId },
}

impl TypeExprKind {
    /// Short description of the node shape, for error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            TypeExprKind::Var(_) => "type variable",
            TypeExprKind::Str(_) => "string literal",
            TypeExprKind::Int(_) => "integer literal",
            TypeExprKind::Call { .. } => "operator call",
            TypeExprKind::Lambda { .. } => "function",
        }
    }
}

/// Arena owning the nodes of one or more expression trees.
///
/// Read-only once built: the evaluator only ever borrows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeExprArena {
    exprs: Vec<TypeExprKind>,
    operands: Vec<TypeExprId>,
}

impl TypeExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: TypeExprKind) -> TypeExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("type expression arena exceeded u32::MAX nodes"));
        self.exprs.push(kind);
        TypeExprId::new(index)
    }

    /// Store an operand list.
    ///
    /// # Panics
    /// Panics if the list has more than `u16::MAX` operands.
    pub fn alloc_operands(&mut self, operands: &[TypeExprId]) -> ExprRange {
        let start = u32::try_from(self.operands.len())
            .unwrap_or_else(|_| panic!("type expression operand list exceeded u32::MAX"));
        let len = u16::try_from(operands.len())
            .unwrap_or_else(|_| panic!("operator applied to more than u16::MAX operands"));
        self.operands.extend_from_slice(operands);
        ExprRange::new(start, len)
    }

    /// Allocate a type variable reference.
    pub fn var(&mut self, name: Name) -> TypeExprId {
        self.alloc(TypeExprKind::Var(name))
    }

    /// Allocate a string literal.
    pub fn str(&mut self, value: Name) -> TypeExprId {
        self.alloc(TypeExprKind::Str(value))
    }

    /// Allocate an integer literal.
    pub fn int(&mut self, value: u32) -> TypeExprId {
        self.alloc(TypeExprKind::Int(value))
    }

    /// Allocate an operator application.
    pub fn call(&mut self, callee: Name, args: &[TypeExprId]) -> TypeExprId {
        let args = self.alloc_operands(args);
        self.alloc(TypeExprKind::Call { callee, args })
    }

    /// Allocate a single-parameter function.
    pub fn lambda(&mut self, param: Name, body: TypeExprId) -> TypeExprId {
        self.alloc(TypeExprKind::Lambda { param, body })
    }

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: TypeExprId) -> &TypeExprKind {
        &self.exprs[id.index()]
    }

    /// Get the operands referenced by `range`.
    #[inline]
    pub fn operands(&self, range: ExprRange) -> &[TypeExprId] {
        let start = range.start as usize;
        &self.operands[start..start + range.len()]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[cfg(test)]
mod tests;
