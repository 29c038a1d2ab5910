//! Interned type representation.

use ttl_ir::Name;

use crate::Idx;

/// Structural data of an interned type.
///
/// Children are `Idx` handles, so hashing and equality stay shallow.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    /// `?`
    Unknown,
    /// `*`
    All,
    /// The empty type.
    NoType,
    /// Nominal declared type, identified by its name.
    Named(Name),
    /// Normalized union: flattened, deduplicated, sorted, two or more
    /// members, no sentinels.
    Union(Box<[Idx]>),
    /// Templatized type `base<args...>`; `base` is always `Named`.
    Applied { base: Idx, args: Box<[Idx]> },
}

/// Kind discriminant of a [`TypeData`], for cheap dispatch.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Tag {
    Unknown,
    All,
    NoType,
    Named,
    Union,
    Applied,
}

impl TypeData {
    pub fn tag(&self) -> Tag {
        match self {
            TypeData::Unknown => Tag::Unknown,
            TypeData::All => Tag::All,
            TypeData::NoType => Tag::NoType,
            TypeData::Named(_) => Tag::Named,
            TypeData::Union(_) => Tag::Union,
            TypeData::Applied { .. } => Tag::Applied,
        }
    }
}
