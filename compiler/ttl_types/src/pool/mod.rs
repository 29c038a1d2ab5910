//! Interning pool for types.
//!
//! The pool is the only owner of type data. Interning takes `&self`, so a
//! single pool can serve evaluations running on several threads; interning is
//! idempotent, which keeps lattice operations observably pure.

mod construct;
mod format;
mod subtype;

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Idx, Tag, TypeData, TypeFlags};

/// Interned type plus its cached flags.
struct Item {
    data: TypeData,
    flags: TypeFlags,
}

struct PoolInner {
    map: FxHashMap<TypeData, u32>,
    items: Vec<Item>,
}

impl PoolInner {
    fn with_sentinels() -> Self {
        let mut inner = PoolInner {
            map: FxHashMap::default(),
            items: Vec::with_capacity(256),
        };
        // Order must match the Idx sentinel constants.
        for data in [TypeData::Unknown, TypeData::All, TypeData::NoType] {
            inner.insert(data);
        }
        inner
    }

    fn flags_of(&self, data: &TypeData) -> TypeFlags {
        match data {
            TypeData::Unknown => TypeFlags::IS_SENTINEL | TypeFlags::HAS_UNKNOWN,
            TypeData::All | TypeData::NoType => TypeFlags::IS_SENTINEL,
            TypeData::Named(_) => TypeFlags::IS_NAMED,
            TypeData::Union(members) => members
                .iter()
                .fold(TypeFlags::IS_UNION, |acc, m| {
                    acc | self.items[m.raw() as usize].flags.propagated()
                }),
            TypeData::Applied { base, args } => std::iter::once(base)
                .chain(args.iter())
                .fold(TypeFlags::IS_APPLIED, |acc, m| {
                    acc | self.items[m.raw() as usize].flags.propagated()
                }),
        }
    }

    fn insert(&mut self, data: TypeData) -> Idx {
        if let Some(&raw) = self.map.get(&data) {
            return Idx::from_raw(raw);
        }
        let raw = u32::try_from(self.items.len())
            .unwrap_or_else(|_| panic!("type pool exceeded u32::MAX types"));
        let flags = self.flags_of(&data);
        self.map.insert(data.clone(), raw);
        self.items.push(Item { data, flags });
        Idx::from_raw(raw)
    }
}

/// Type interning pool.
pub struct Pool {
    inner: RwLock<PoolInner>,
}

impl Pool {
    /// Create a pool holding only the sentinel types.
    pub fn new() -> Self {
        Pool {
            inner: RwLock::new(PoolInner::with_sentinels()),
        }
    }

    /// Intern raw type data.
    ///
    /// Callers should prefer the normalizing constructors (`named`, `union`,
    /// `applied`); this is the primitive they build on.
    pub(crate) fn intern(&self, data: TypeData) -> Idx {
        if let Some(&raw) = self.inner.read().map.get(&data) {
            return Idx::from_raw(raw);
        }
        self.inner.write().insert(data)
    }

    /// Structural data of a type.
    ///
    /// # Panics
    /// Panics if `idx` was not produced by this pool.
    pub fn data(&self, idx: Idx) -> TypeData {
        self.inner.read().items[idx.raw() as usize].data.clone()
    }

    /// Kind of a type.
    pub fn tag(&self, idx: Idx) -> Tag {
        self.inner.read().items[idx.raw() as usize].data.tag()
    }

    /// Flags cached when the type was interned.
    ///
    /// Cheaper than matching on [`Pool::data`], which clones compound data.
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.inner.read().items[idx.raw() as usize].flags
    }

    /// Members of a type viewed as a union.
    ///
    /// A union yields its members, the empty type yields nothing, and any
    /// other type yields itself.
    pub fn union_members(&self, idx: Idx) -> SmallVec<[Idx; 4]> {
        match &self.inner.read().items[idx.raw() as usize].data {
            TypeData::Union(members) => members.iter().copied().collect(),
            TypeData::NoType => SmallVec::new(),
            _ => smallvec::smallvec![idx],
        }
    }

    /// Raw base of a templatized type.
    pub fn applied_base(&self, idx: Idx) -> Option<Idx> {
        match &self.inner.read().items[idx.raw() as usize].data {
            TypeData::Applied { base, .. } => Some(*base),
            _ => None,
        }
    }

    /// Template arguments of a templatized type; empty for anything else.
    pub fn applied_args(&self, idx: Idx) -> SmallVec<[Idx; 4]> {
        match &self.inner.read().items[idx.raw() as usize].data {
            TypeData::Applied { args, .. } => args.iter().copied().collect(),
            _ => SmallVec::new(),
        }
    }

    /// Number of interned types, sentinels included.
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    /// A pool always holds its sentinels.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared pool handle for use across threads.
#[derive(Clone, Default)]
pub struct SharedPool(Arc<Pool>);

impl SharedPool {
    pub fn new() -> Self {
        SharedPool(Arc::new(Pool::new()))
    }
}

impl std::ops::Deref for SharedPool {
    type Target = Pool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
