//! Normalizing type constructors.

use smallvec::SmallVec;
use ttl_ir::Name;

use crate::{Idx, Pool, Tag, TypeData};

impl Pool {
    /// Intern the nominal type called `name`.
    pub fn named(&self, name: Name) -> Idx {
        self.intern(TypeData::Named(name))
    }

    /// Create the union of `members`.
    ///
    /// Nested unions are flattened. `?` absorbs everything, then `*` absorbs
    /// everything, and the empty type is dropped. No members gives the empty
    /// type; a single distinct member is returned as-is.
    pub fn union(&self, members: &[Idx]) -> Idx {
        let mut flat: SmallVec<[Idx; 8]> = SmallVec::new();
        for &member in members {
            if member.is_unknown() {
                return Idx::UNKNOWN;
            }
            flat.extend(self.union_members(member));
        }

        if flat.contains(&Idx::ALL) {
            return Idx::ALL;
        }

        flat.sort_unstable();
        flat.dedup();

        match flat.as_slice() {
            [] => Idx::NO_TYPE,
            [single] => *single,
            _ => self.intern(TypeData::Union(flat.into_iter().collect())),
        }
    }

    /// Create the templatized type `base<args...>`.
    ///
    /// Only nominal types can be templatized: with no arguments, or with a
    /// base that is not a named type, `base` is returned unchanged.
    pub fn applied(&self, base: Idx, args: &[Idx]) -> Idx {
        if args.is_empty() || self.tag(base) != Tag::Named {
            return base;
        }
        self.intern(TypeData::Applied {
            base,
            args: args.into(),
        })
    }
}
