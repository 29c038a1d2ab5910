//! Recursive evaluation of type transformation expressions.
//!
//! # Dispatch
//!
//! A node in type position is evaluated by shape:
//!
//! 1. `Var(name)`: environment lookup, `?` when unbound.
//! 2. `Call` whose callee is a type-valued [`Keyword`]: that operator's rule
//!    (see `operators.rs`).
//! 3. Anything else is a [`TransformError`].
//!
//! Conditions of `cond` are evaluated in predicate position (see
//! `predicates.rs`). Names are never conflated: variables only ever consult
//! the environment, `type('Name')` only ever consults the registry.
//!
//! # Misses
//!
//! Resolution misses are tracked as [`ResolutionMiss`] while walking and only
//! collapse to `?` in the resulting type. [`TypeTransformer::eval`] drops
//! them; [`TypeTransformer::eval_reporting`] returns them for callers that
//! want to diagnose misspelled names.

mod operators;
mod predicates;

use ttl_ir::{Keyword, Name, StringInterner, TypeExprArena, TypeExprId, TypeExprKind};
use ttl_stack::{ensure_sufficient_stack, DepthLimit};
use ttl_types::{Idx, Pool, TypeRegistry};

use crate::errors::{OperandKind, Position};
use crate::{TransformConfig, TransformError, TypeVarEnv};

/// A name that did not resolve and was replaced by `?`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionMiss {
    /// A type variable missing from the environment.
    UnboundTypeVar(Name),
    /// A `type('Name')` lookup missing from the registry.
    UndeclaredType(Name),
}

/// Result of a reporting evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// The resulting type.
    pub ty: Idx,
    /// Distinct names that resolved to `?` along the way, in order of their
    /// first miss.
    pub misses: Vec<ResolutionMiss>,
}

/// Evaluator for type transformation expressions.
///
/// Borrows everything it reads and writes nothing but freshly interned types
/// into the pool, so identical inputs always give identical results and
/// separate transformers can run on separate threads.
pub struct TypeTransformer<'a, R: TypeRegistry + ?Sized> {
    interner: &'a StringInterner,
    arena: &'a TypeExprArena,
    pool: &'a Pool,
    registry: &'a R,
    config: TransformConfig,
}

impl<'a, R: TypeRegistry + ?Sized> TypeTransformer<'a, R> {
    /// Create a transformer with the default configuration.
    pub fn new(
        interner: &'a StringInterner,
        arena: &'a TypeExprArena,
        pool: &'a Pool,
        registry: &'a R,
    ) -> Self {
        TypeTransformer {
            interner,
            arena,
            pool,
            registry,
            config: TransformConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> TransformConfig {
        self.config
    }

    /// Evaluate `root` under `env`.
    ///
    /// Returns `?` for any unresolved name. Fails only on a malformed tree or
    /// when the depth limit is exceeded.
    pub fn eval(&self, root: TypeExprId, env: &TypeVarEnv) -> Result<Idx, TransformError> {
        self.eval_reporting(root, env).map(|evaluation| evaluation.ty)
    }

    /// Evaluate `root` under `env`, also returning the resolution misses.
    #[tracing::instrument(level = "debug", skip(self, env))]
    pub fn eval_reporting(
        &self,
        root: TypeExprId,
        env: &TypeVarEnv,
    ) -> Result<Evaluation, TransformError> {
        let mut walker = Walker {
            cx: self,
            limit: self.config.depth_limit(),
            misses: Vec::new(),
        };

        match walker.eval_type(root, env, 0) {
            Ok(ty) => {
                tracing::debug!(
                    ty = %self.pool.format_type(ty, self.interner),
                    misses = walker.misses.len(),
                    "type transformation evaluated"
                );
                Ok(Evaluation {
                    ty,
                    misses: walker.misses,
                })
            }
            Err(err) => {
                if err.is_contract_violation() {
                    tracing::warn!(error = %err, "malformed type transformation expression");
                } else {
                    tracing::debug!(error = %err, "type transformation aborted");
                }
                Err(err)
            }
        }
    }
}

/// State of one evaluation.
struct Walker<'t, 'a, R: TypeRegistry + ?Sized> {
    cx: &'t TypeTransformer<'a, R>,
    limit: DepthLimit,
    misses: Vec<ResolutionMiss>,
}

impl<R: TypeRegistry + ?Sized> Walker<'_, '_, R> {
    /// Evaluate a node in type position.
    fn eval_type(
        &mut self,
        id: TypeExprId,
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<Idx, TransformError> {
        let depth = self.limit.descend(depth)?;
        ensure_sufficient_stack(|| self.eval_type_inner(id, env, depth))
    }

    #[tracing::instrument(level = "trace", skip(self, env))]
    fn eval_type_inner(
        &mut self,
        id: TypeExprId,
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<Idx, TransformError> {
        let arena = self.cx.arena;
        match *arena.get(id) {
            TypeExprKind::Var(name) => Ok(self.eval_type_var(name, env)),
            TypeExprKind::Call { callee, args } => {
                let keyword = self.keyword(callee)?;
                check_position(keyword, Position::Type)?;
                let operands = arena.operands(args);
                check_arity(keyword, operands.len())?;
                self.eval_operator(keyword, operands, env, depth)
            }
            ref other @ (TypeExprKind::Str(_)
            | TypeExprKind::Int(_)
            | TypeExprKind::Lambda { .. }) => Err(TransformError::UnexpectedNode {
                found: other.describe(),
                expected: Position::Type,
            }),
        }
    }

    fn eval_type_var(&mut self, name: Name, env: &TypeVarEnv) -> Idx {
        env.lookup(name).unwrap_or_else(|| {
            tracing::debug!(
                name = self.cx.interner.lookup(name),
                "unbound type variable resolved to unknown"
            );
            self.record_miss(ResolutionMiss::UnboundTypeVar(name));
            Idx::UNKNOWN
        })
    }

    fn resolve_type_name(&mut self, name: Name) -> Idx {
        self.cx.registry.resolve(name).unwrap_or_else(|| {
            tracing::debug!(
                name = self.cx.interner.lookup(name),
                "undeclared type name resolved to unknown"
            );
            self.record_miss(ResolutionMiss::UndeclaredType(name));
            Idx::UNKNOWN
        })
    }

    /// A name is reported once, at its first miss, however many times a
    /// `mapunion` body revisits it.
    fn record_miss(&mut self, miss: ResolutionMiss) {
        if !self.misses.contains(&miss) {
            self.misses.push(miss);
        }
    }

    fn keyword(&self, callee: Name) -> Result<Keyword, TransformError> {
        let spelling = self.cx.interner.lookup(callee);
        Keyword::from_name(spelling).ok_or_else(|| TransformError::UnknownOperator {
            name: spelling.to_owned(),
        })
    }

    // === Operand shapes ===

    fn expect_str(
        &self,
        keyword: Keyword,
        position: usize,
        id: TypeExprId,
    ) -> Result<Name, TransformError> {
        match *self.cx.arena.get(id) {
            TypeExprKind::Str(value) => Ok(value),
            _ => Err(shape_error(keyword, position, OperandKind::StringLiteral)),
        }
    }

    fn expect_int(
        &self,
        keyword: Keyword,
        position: usize,
        id: TypeExprId,
    ) -> Result<u32, TransformError> {
        match *self.cx.arena.get(id) {
            TypeExprKind::Int(value) => Ok(value),
            _ => Err(shape_error(keyword, position, OperandKind::IntegerLiteral)),
        }
    }

    fn expect_lambda(
        &self,
        keyword: Keyword,
        position: usize,
        id: TypeExprId,
    ) -> Result<(Name, TypeExprId), TransformError> {
        match *self.cx.arena.get(id) {
            TypeExprKind::Lambda { param, body } => Ok((param, body)),
            _ => Err(shape_error(keyword, position, OperandKind::Function)),
        }
    }
}

/// Predicates only appear as `cond` conditions, type operators everywhere else.
fn check_position(keyword: Keyword, expected: Position) -> Result<(), TransformError> {
    let found = if keyword.is_predicate() {
        Position::Predicate
    } else {
        Position::Type
    };
    if found == expected {
        Ok(())
    } else {
        Err(misplaced(keyword, expected))
    }
}

fn misplaced(keyword: Keyword, expected: Position) -> TransformError {
    TransformError::Misplaced { keyword, expected }
}

fn check_arity(keyword: Keyword, found: usize) -> Result<(), TransformError> {
    let expected = keyword.arity();
    if expected.accepts(found) {
        Ok(())
    } else {
        Err(TransformError::WrongArity {
            keyword,
            expected,
            found,
        })
    }
}

fn shape_error(keyword: Keyword, position: usize, expected: OperandKind) -> TransformError {
    TransformError::OperandShape {
        keyword,
        position,
        expected,
    }
}
