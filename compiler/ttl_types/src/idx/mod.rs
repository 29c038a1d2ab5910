//! Type index handle.

use std::fmt;

/// A 32-bit index into the type [`Pool`](crate::Pool).
///
/// Types are compared by index equality, never structurally.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Sentinels (pre-interned at fixed indices) ===

    /// The unknown type `?`: top of the lattice and the fallback result.
    pub const UNKNOWN: Self = Self(0);
    /// The all type `*`: supertype of every declared type.
    pub const ALL: Self = Self(1);
    /// The empty type: bottom of the lattice, identity of union.
    pub const NO_TYPE: Self = Self(2);

    /// First index for dynamically interned types.
    pub const FIRST_DYNAMIC: u32 = 3;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the pre-interned sentinels.
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UNKNOWN => write!(f, "Idx::UNKNOWN"),
            Self::ALL => write!(f, "Idx::ALL"),
            Self::NO_TYPE => write!(f, "Idx::NO_TYPE"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

// Idx must stay a plain u32
const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests;
