//! Recursion guards for the type transformation evaluator.
//!
//! Two independent protections are provided:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so a
//!   legitimately deep expression never overflows it.
//! - [`DepthLimit`] caps the logical nesting depth of an evaluation, so a
//!   degenerate or self-referential expression fails fast with
//!   [`DepthLimitExceeded`] instead of walking forever.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack in 1MB segments once less
//!   than 100KB remains.
//! - **WASM targets**: passthrough; the depth limit is the only guard.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// Wrap each recursive descent step:
///
/// ```text
/// fn eval_expr(&self, id: TypeExprId, depth: usize) -> Result<Idx, TransformError> {
///     ensure_sufficient_stack(|| self.eval_expr_inner(id, depth))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Logical depth budget for one evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DepthLimit(usize);

/// Returned when a descent would go past its [`DepthLimit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("recursion depth limit of {limit} exceeded")]
pub struct DepthLimitExceeded {
    /// The configured maximum depth.
    pub limit: usize,
}

impl DepthLimit {
    /// Create a limit allowing `max` nested levels.
    #[inline]
    pub const fn new(max: usize) -> Self {
        DepthLimit(max)
    }

    /// The configured maximum depth.
    #[inline]
    pub const fn max(self) -> usize {
        self.0
    }

    /// Check that descending from `depth` stays within the limit.
    ///
    /// Returns the depth of the child level.
    #[inline]
    pub fn descend(self, depth: usize) -> Result<usize, DepthLimitExceeded> {
        if depth >= self.0 {
            return Err(DepthLimitExceeded { limit: self.0 });
        }
        Ok(depth + 1)
    }
}

#[cfg(test)]
mod tests;
