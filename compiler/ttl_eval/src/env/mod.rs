//! Type variable environment.
//!
//! Maps type parameter names to the types bound at one generic use site.
//! Environments are immutable once built: operators that bind names for a
//! sub-expression create a child overlay with [`TypeVarEnv::extend`] and the
//! parent stays valid and unchanged.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use ttl_ir::Name;
use ttl_types::Idx;

#[derive(Debug)]
struct TypeVarEnvInner {
    bindings: FxHashMap<Name, Idx>,
    parent: Option<TypeVarEnv>,
}

/// Immutable type variable environment.
///
/// Cloning and extending are O(1) in the size of the parent chain; children
/// share their ancestors through `Arc`, so an environment can be handed to
/// evaluations on other threads.
///
/// ```ignore
/// let env = TypeVarEnv::for_call_site(&[t, u], &[string_ty, number_ty]);
/// let child = env.extend([(x, array_ty)]);
///
/// assert_eq!(child.lookup(t), Some(string_ty));
/// assert_eq!(env.lookup(x), None);
/// ```
#[derive(Clone, Debug)]
pub struct TypeVarEnv(Arc<TypeVarEnvInner>);

impl TypeVarEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::from_bindings(std::iter::empty())
    }

    /// Create a root environment. Later duplicates replace earlier ones.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (Name, Idx)>) -> Self {
        TypeVarEnv(Arc::new(TypeVarEnvInner {
            bindings: bindings.into_iter().collect(),
            parent: None,
        }))
    }

    /// Bind template parameters to the argument types of a call site.
    ///
    /// Parameters and arguments pair up positionally. Extra arguments are
    /// ignored; parameters without an argument stay unbound.
    pub fn for_call_site(params: &[Name], args: &[Idx]) -> Self {
        Self::from_bindings(params.iter().copied().zip(args.iter().copied()))
    }

    /// Create a child environment overlaying `bindings` on `self`.
    #[must_use]
    pub fn extend(&self, bindings: impl IntoIterator<Item = (Name, Idx)>) -> Self {
        TypeVarEnv(Arc::new(TypeVarEnvInner {
            bindings: bindings.into_iter().collect(),
            parent: Some(self.clone()),
        }))
    }

    /// Look up a name; the nearest binding wins.
    pub fn lookup(&self, name: Name) -> Option<Idx> {
        let mut env = self;
        loop {
            if let Some(&ty) = env.0.bindings.get(&name) {
                return Some(ty);
            }
            env = env.0.parent.as_ref()?;
        }
    }

    pub fn contains(&self, name: Name) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of bindings in this level only.
    pub fn local_len(&self) -> usize {
        self.0.bindings.len()
    }

    /// Number of levels, 1 for a root environment.
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |env| env.0.parent.as_ref()).count()
    }

    /// Whether no level binds anything.
    pub fn is_empty(&self) -> bool {
        std::iter::successors(Some(self), |env| env.0.parent.as_ref())
            .all(|env| env.0.bindings.is_empty())
    }

    /// Bound names, innermost level first. Shadowed names repeat.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        std::iter::successors(Some(self), |env| env.0.parent.as_ref())
            .flat_map(|env| env.0.bindings.keys().copied())
    }
}

impl Default for TypeVarEnv {
    fn default() -> Self {
        Self::new()
    }
}
