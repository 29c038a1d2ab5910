//! Type lattice for type transformation expressions.
//!
//! Types are interned in a [`Pool`] and handled as 32-bit [`Idx`] values, so
//! type equality is an index comparison. The lattice has three sentinels:
//!
//! - [`Idx::UNKNOWN`]: top element and universal fallback
//! - [`Idx::ALL`]: top of the declared types
//! - [`Idx::NO_TYPE`]: bottom element, the empty union
//!
//! Declared types are nominal ([`TypeData::Named`]); compound types are
//! normalized unions and templatized applications `Base<Args...>`.
//!
//! The [`TypeRegistry`] trait is the read-only name lookup handed to the
//! evaluator. [`TypeTable`] is the table the type checker fills in before any
//! evaluation runs.

mod data;
mod flags;
mod idx;
mod pool;
mod registry;

pub use data::{Tag, TypeData};
pub use flags::TypeFlags;
pub use idx::Idx;
pub use pool::{Pool, SharedPool};
pub use registry::{TypeRegistry, TypeTable};
