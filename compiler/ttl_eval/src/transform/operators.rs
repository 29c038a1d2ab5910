//! Evaluation rules for type-valued operators.

use smallvec::SmallVec;
use ttl_ir::{Keyword, TypeExprId};
use ttl_types::{Idx, Tag, TypeRegistry};

use super::{misplaced, Walker};
use crate::errors::Position;
use crate::{TransformError, TypeVarEnv};

impl<R: TypeRegistry + ?Sized> Walker<'_, '_, R> {
    /// Apply a keyword in type position. Position and arity are already
    /// checked.
    pub(super) fn eval_operator(
        &mut self,
        keyword: Keyword,
        operands: &[TypeExprId],
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<Idx, TransformError> {
        match keyword {
            Keyword::Type => self.eval_named_type(operands, env, depth),
            Keyword::Union => {
                let members = self.eval_all(operands, env, depth)?;
                Ok(self.cx.pool.union(&members))
            }
            Keyword::None => Ok(Idx::NO_TYPE),
            Keyword::All => Ok(Idx::ALL),
            Keyword::Unknown => Ok(Idx::UNKNOWN),
            Keyword::Cond => {
                // Only the selected branch is visited.
                let branch = if self.eval_predicate(operands[0], env, depth)? {
                    operands[1]
                } else {
                    operands[2]
                };
                self.eval_type(branch, env, depth)
            }
            Keyword::MapUnion => self.eval_map_union(operands, env, depth),
            Keyword::RawTypeOf => {
                let ty = self.eval_type(operands[0], env, depth)?;
                Ok(self.cx.pool.applied_base(ty).unwrap_or(Idx::UNKNOWN))
            }
            Keyword::TemplateTypeOf => {
                let index = self.expect_int(keyword, 2, operands[1])?;
                let ty = self.eval_type(operands[0], env, depth)?;
                let args = self.cx.pool.applied_args(ty);
                Ok(args.get(index as usize).copied().unwrap_or(Idx::UNKNOWN))
            }
            // Rejected by `check_position` before dispatch.
            _ => Err(misplaced(keyword, Position::Type)),
        }
    }

    /// `type('Name')` and `type('Name', Args...)`.
    ///
    /// Template arguments are always evaluated so malformed operands are
    /// reported even when the base name is undeclared.
    fn eval_named_type(
        &mut self,
        operands: &[TypeExprId],
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<Idx, TransformError> {
        let name = self.expect_str(Keyword::Type, 1, operands[0])?;
        let args = self.eval_all(&operands[1..], env, depth)?;
        let base = self.resolve_type_name(name);
        if base.is_unknown() || args.is_empty() {
            return Ok(base);
        }
        if self.cx.pool.tag(base) != Tag::Named {
            tracing::debug!(
                name = self.cx.interner.lookup(name),
                "template arguments applied to a non-nominal type are dropped"
            );
        }
        Ok(self.cx.pool.applied(base, &args))
    }

    /// `mapunion(U, (x) => Body)`: evaluate `Body` once per member of `U`
    /// with `x` bound to the member, and union the results.
    fn eval_map_union(
        &mut self,
        operands: &[TypeExprId],
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<Idx, TransformError> {
        let (param, body) = self.expect_lambda(Keyword::MapUnion, 2, operands[1])?;
        let source = self.eval_type(operands[0], env, depth)?;

        let mut mapped: SmallVec<[Idx; 8]> = SmallVec::new();
        for member in self.cx.pool.union_members(source) {
            let scope = env.extend([(param, member)]);
            mapped.push(self.eval_type(body, &scope, depth)?);
        }
        Ok(self.cx.pool.union(&mapped))
    }

    fn eval_all(
        &mut self,
        operands: &[TypeExprId],
        env: &TypeVarEnv,
        depth: usize,
    ) -> Result<SmallVec<[Idx; 4]>, TransformError> {
        operands
            .iter()
            .map(|&operand| self.eval_type(operand, env, depth))
            .collect()
    }
}
