//! Name table shared by the parser, the type table and the evaluator.
//!
//! Type-variable names, type names inside `type('...')` literals and operator
//! callees all become [`Name`]s here, so the evaluator compares them as
//! integers and only turns them back into text for keyword dispatch and log
//! output. The table is split into shards keyed by the high bits of an
//! `FxHash`, each behind its own lock, so evaluations on different threads
//! rarely contend while interning.

use std::hash::Hasher;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::{Keyword, Name};

// Shard selection takes the top four hash bits.
const _: () = assert!(Name::NUM_SHARDS == 16);

/// A shard ran out of local indices.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("name shard {shard} is full after {count} names (limit {limit})", limit = Name::MAX_LOCAL)]
pub struct InternError {
    pub shard: usize,
    pub count: usize,
}

/// One shard: text to local index, and local index back to text.
#[derive(Default)]
struct Shard {
    index: FxHashMap<&'static str, u32>,
    text: Vec<&'static str>,
}

impl Shard {
    fn find(&self, s: &str) -> Option<u32> {
        self.index.get(s).copied()
    }

    fn push(&mut self, shard: usize, s: &str) -> Result<u32, InternError> {
        let count = self.text.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError { shard, count })?;
        // Names live as long as the type-checking session.
        let text: &'static str = Box::leak(s.into());
        self.text.push(text);
        self.index.insert(text, local);
        Ok(local)
    }
}

/// Concurrent string interner producing [`Name`]s.
///
/// The empty string is [`Name::EMPTY`]; every [`Keyword`] spelling is
/// interned on construction.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::NUM_SHARDS],
    count: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(Shard::default())),
            count: AtomicUsize::new(0),
        };
        // Shard 0 must start with "" so that `Name::EMPTY` resolves to it.
        interner.shards[0].write().text.push("");
        interner.shards[0].write().index.insert("", 0);
        interner.count.store(1, Ordering::Relaxed);

        for keyword in Keyword::ALL {
            interner.intern(keyword.as_str());
        }
        interner
    }

    fn shard_of(s: &str) -> u32 {
        if s.is_empty() {
            return 0;
        }
        let mut hasher = FxHasher::default();
        hasher.write(s.as_bytes());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "a u64 shifted right by 60 fits in four bits"
        )]
        let shard = (hasher.finish() >> 60) as u32;
        shard
    }

    /// Intern `s`, failing only when its shard is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_id = Self::shard_of(s);
        let shard = &self.shards[shard_id as usize];

        if let Some(local) = shard.read().find(s) {
            return Ok(Name::new(shard_id, local));
        }

        let mut shard = shard.write();
        let local = match shard.find(s) {
            Some(local) => local,
            None => {
                let local = shard.push(shard_id as usize, s)?;
                self.count.fetch_add(1, Ordering::Relaxed);
                local
            }
        };
        Ok(Name::new(shard_id, local))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics when the shard for `s` is full; see [`StringInterner::try_intern`].
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The name of `s` if it was interned before.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_id = Self::shard_of(s);
        let local = self.shards[shard_id as usize].read().find(s)?;
        Some(Name::new(shard_id, local))
    }

    /// Text of `name`.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().text[name.local()]
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference-counted [`StringInterner`] for handing to worker threads.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
