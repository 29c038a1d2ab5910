//! Evaluator for type transformation expressions.
//!
//! A type transformation expression describes how the result type of a
//! generic declaration is derived from the types bound to its template
//! parameters. The type checker builds a [`TypeVarEnv`] from the argument
//! types at a call site and asks a [`TypeTransformer`] for the result:
//!
//! ```ignore
//! let env = TypeVarEnv::for_call_site(&template_params, &arg_types);
//! let ty = TypeTransformer::new(&interner, &arena, &pool, &table).eval(root, &env)?;
//! ```
//!
//! # Failure tiers
//!
//! - Unbound type variables and undeclared type names evaluate to
//!   `Idx::UNKNOWN`. This is never an error.
//! - Trees the evaluator cannot dispatch and trees nested past
//!   [`TransformConfig::max_depth`] fail with a [`TransformError`], which
//!   aborts only the current evaluation.
//!
//! # Adding an operator
//!
//! Add the variant to `ttl_ir::Keyword` with its spelling and arity, then
//! give it an arm in the type-position or predicate-position match. Operand
//! shapes are validated with the `expect_*` helpers, sub-expressions are
//! evaluated recursively, and any names bound for a sub-expression go into a
//! child environment built with [`TypeVarEnv::extend`].

mod config;
mod env;
pub mod errors;
mod transform;

use std::sync::Once;

use ttl_ir::{StringInterner, TypeExprArena, TypeExprId};
use ttl_types::{Idx, Pool, TypeRegistry};

pub use config::TransformConfig;
pub use env::TypeVarEnv;
pub use errors::TransformError;
pub use transform::{Evaluation, ResolutionMiss, TypeTransformer};

/// Evaluate `root` under `env` with the default configuration.
pub fn evaluate<R: TypeRegistry + ?Sized>(
    interner: &StringInterner,
    arena: &TypeExprArena,
    pool: &Pool,
    registry: &R,
    root: TypeExprId,
    env: &TypeVarEnv,
) -> Result<Idx, TransformError> {
    TypeTransformer::new(interner, arena, pool, registry).eval(root, env)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for debugging.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=ttl_eval=trace`. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed elsewhere wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
