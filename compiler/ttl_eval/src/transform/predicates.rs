//! Evaluation of boolean conditions for `cond`.

use ttl_ir::{Keyword, TypeExprId, TypeExprKind};
use ttl_stack::ensure_sufficient_stack;
use ttl_types::{TypeFlags, TypeRegistry};

use super::{check_arity, check_position, misplaced, Walker};
use crate::errors::Position;
use crate::{TransformError, TypeVarEnv};

impl<R: TypeRegistry + ?Sized> Walker<'_, '_, R> {
    /// Evaluate a node in predicate position.
    pub(super) fn eval_predicate(
        &mut self,
        id: TypeExprId,
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<bool, TransformError> {
        let depth = self.limit.descend(depth)?;
        ensure_sufficient_stack(|| self.eval_predicate_inner(id, env, depth))
    }

    #[tracing::instrument(level = "trace", skip(self, env))]
    fn eval_predicate_inner(
        &mut self,
        id: TypeExprId,
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<bool, TransformError> {
        let arena = self.cx.arena;
        let node = arena.get(id);
        let TypeExprKind::Call { callee, args } = *node else {
            return Err(TransformError::UnexpectedNode {
                found: node.describe(),
                expected: Position::Predicate,
            });
        };

        let keyword = self.keyword(callee)?;
        check_position(keyword, Position::Predicate)?;
        let operands = arena.operands(args);
        check_arity(keyword, operands.len())?;

        let pool = self.cx.pool;
        match keyword {
            Keyword::Eq => {
                let lhs = self.eval_type(operands[0], env, depth)?;
                let rhs = self.eval_type(operands[1], env, depth)?;
                Ok(lhs == rhs)
            }
            Keyword::Sub => {
                let sub = self.eval_type(operands[0], env, depth)?;
                let sup = self.eval_type(operands[1], env, depth)?;
                Ok(pool.is_subtype(sub, sup))
            }
            Keyword::IsTemplatized => {
                let ty = self.eval_type(operands[0], env, depth)?;
                Ok(pool.flags(ty).contains(TypeFlags::IS_APPLIED))
            }
            Keyword::IsUnknown => Ok(self.eval_type(operands[0], env, depth)?.is_unknown()),
            // Rejected by `check_position` above.
            _ => Err(misplaced(keyword, Position::Predicate)),
        }
    }
}
