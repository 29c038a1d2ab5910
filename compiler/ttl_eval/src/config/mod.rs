//! Evaluation limits.

use ttl_stack::DepthLimit;

/// Configuration for a [`TypeTransformer`](crate::TypeTransformer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransformConfig {
    /// Maximum nesting depth of operator applications and function bodies.
    pub max_depth: usize,
}

impl TransformConfig {
    /// Depth used by [`TransformConfig::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    /// Depth used by [`TransformConfig::bounded`].
    pub const BOUNDED_MAX_DEPTH: usize = 64;

    /// Tight budget for callers evaluating untrusted or generated annotations.
    pub const fn bounded() -> Self {
        TransformConfig {
            max_depth: Self::BOUNDED_MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        TransformConfig { max_depth }
    }

    pub(crate) const fn depth_limit(self) -> DepthLimit {
        DepthLimit::new(self.max_depth)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
