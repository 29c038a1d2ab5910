//! Cached per-type property flags.

use bitflags::bitflags;

bitflags! {
    /// Properties computed once when a type is interned.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// One of `?`, `*` or the empty type.
        const IS_SENTINEL = 1 << 0;
        /// A nominal declared type.
        const IS_NAMED = 1 << 1;
        /// A union of two or more members.
        const IS_UNION = 1 << 2;
        /// A templatized type `Base<...>`.
        const IS_APPLIED = 1 << 3;
        /// Is `?` or mentions `?` somewhere inside.
        const HAS_UNKNOWN = 1 << 4;
    }
}

impl TypeFlags {
    /// Flags inherited by a compound type from one of its children.
    #[inline]
    pub fn propagated(self) -> Self {
        self & Self::HAS_UNKNOWN
    }
}

#[cfg(test)]
mod tests;
