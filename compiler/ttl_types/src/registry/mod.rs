//! Read-only name lookup of declared types.
//!
//! The type checker populates a [`TypeTable`] while it processes
//! declarations. Once evaluation starts it only hands out `&impl TypeRegistry`,
//! so no transformation can declare or replace a type.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use ttl_ir::{Name, StringInterner};

use crate::{Idx, Pool};

/// Read-only capability to resolve a type name.
pub trait TypeRegistry {
    /// The type declared under `name`, if any.
    fn resolve(&self, name: Name) -> Option<Idx>;
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
    fn resolve(&self, name: Name) -> Option<Idx> {
        (**self).resolve(name)
    }
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for Arc<T> {
    fn resolve(&self, name: Name) -> Option<Idx> {
        (**self).resolve(name)
    }
}

/// Names declared by [`TypeTable::with_builtins`].
const BUILTIN_TYPES: &[&str] = &[
    "Object", "Array", "Function", "string", "number", "boolean", "null", "undefined",
];

/// Name → type table filled in during declaration processing.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: FxHashMap<Name, Idx>,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the builtin nominal types declared.
    pub fn with_builtins(pool: &Pool, interner: &StringInterner) -> Self {
        let mut table = Self::new();
        for &builtin in BUILTIN_TYPES {
            table.declare_named(pool, interner.intern(builtin));
        }
        table
    }

    /// Declare `name` as `ty`, returning the previous declaration.
    pub fn declare(&mut self, name: Name, ty: Idx) -> Option<Idx> {
        let previous = self.types.insert(name, ty);
        if let Some(previous) = previous {
            tracing::debug!(?name, ?previous, ?ty, "type declaration replaced");
        }
        previous
    }

    /// Declare the nominal type called `name` and return it.
    pub fn declare_named(&mut self, pool: &Pool, name: Name) -> Idx {
        let ty = pool.named(name);
        self.declare(name, ty);
        ty
    }

    pub fn contains(&self, name: Name) -> bool {
        self.types.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for TypeTable {
    fn resolve(&self, name: Name) -> Option<Idx> {
        self.types.get(&name).copied()
    }
}
