//! Subtype relation over the lattice.

use crate::{Idx, Pool, TypeData, TypeFlags};

impl Pool {
    /// Whether `sub` is a subtype of `sup`.
    ///
    /// `?` is compatible in both directions, `*` is above every type and the
    /// empty type below every type. Unions distribute: a union is a subtype
    /// when each member is, and a type is below a union when it is below some
    /// member. `Base<...>` is below the raw `Base`. Template arguments are
    /// invariant, except that `?` as an argument matches any argument.
    pub fn is_subtype(&self, sub: Idx, sup: Idx) -> bool {
        if sub == sup
            || sup == Idx::ALL
            || sup.is_unknown()
            || sub.is_unknown()
            || sub == Idx::NO_TYPE
        {
            return true;
        }
        // `*` never appears in a union and nothing but itself sits below the
        // empty type.
        if sub.is_sentinel() || sup.is_sentinel() {
            return false;
        }

        // Data is cloned out so no lock is held across the recursion.
        let sub_data = self.data(sub);
        if let TypeData::Union(members) = &sub_data {
            return members.iter().all(|&m| self.is_subtype(m, sup));
        }

        match (sub_data, self.data(sup)) {
            (_, TypeData::Union(members)) => members.iter().any(|&m| self.is_subtype(sub, m)),
            (TypeData::Applied { base, .. }, TypeData::Named(_)) => base == sup,
            (
                TypeData::Applied { base, args },
                TypeData::Applied {
                    base: sup_base,
                    args: sup_args,
                },
            ) => base == sup_base && self.template_args_match(&args, &sup_args),
            _ => false,
        }
    }

    fn template_args_match(&self, args: &[Idx], other: &[Idx]) -> bool {
        args.len() == other.len()
            && args
                .iter()
                .zip(other)
                .all(|(&a, &b)| self.template_arg_matches(a, b))
    }

    /// Equality of two template arguments with `?` as a wildcard at any
    /// nesting level.
    fn template_arg_matches(&self, a: Idx, b: Idx) -> bool {
        if a == b || a.is_unknown() || b.is_unknown() {
            return true;
        }
        // Interned types without `?` inside are equal only by index.
        let mentions_unknown = (self.flags(a) | self.flags(b)).contains(TypeFlags::HAS_UNKNOWN);
        if !mentions_unknown {
            return false;
        }
        match (self.data(a), self.data(b)) {
            (
                TypeData::Applied { base, args },
                TypeData::Applied {
                    base: other_base,
                    args: other_args,
                },
            ) => base == other_base && self.template_args_match(&args, &other_args),
            _ => false,
        }
    }
}
