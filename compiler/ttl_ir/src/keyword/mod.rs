//! Operator vocabulary of the type transformation language.
//!
//! Every operator the parser may emit is listed here with its fixed arity.
//! Adding an operator means adding a variant, its spelling and its arity;
//! the evaluator's exhaustive match then refuses to compile until the new
//! operator has an evaluation rule.

use std::fmt;

/// Operator keyword of a `Call` node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    // === Type-valued operators ===
    /// `type('Name', Args...)`: named-type lookup, optionally templatized.
    Type,
    /// `union(A, B, ...)`.
    Union,
    /// `none()`: the empty type.
    None,
    /// `all()`: the top of declared types.
    All,
    /// `unknown()`: the fallback type.
    Unknown,
    /// `cond(Pred, Then, Else)`.
    Cond,
    /// `mapunion(U, (x) => Body)`.
    MapUnion,
    /// `rawTypeOf(T)`: `Base` of `Base<...>`.
    RawTypeOf,
    /// `templateTypeOf(T, i)`: i-th template argument of `T`.
    TemplateTypeOf,

    // === Boolean-valued predicates ===
    /// `eq(A, B)`.
    Eq,
    /// `sub(A, B)`.
    Sub,
    /// `isTemplatized(T)`.
    IsTemplatized,
    /// `isUnknown(T)`.
    IsUnknown,
}

/// Number of operands an operator accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly `n` operands.
    Exact(usize),
    /// `n` or more operands.
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` operands satisfy this arity.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 13] = [
        Keyword::Type,
        Keyword::Union,
        Keyword::None,
        Keyword::All,
        Keyword::Unknown,
        Keyword::Cond,
        Keyword::MapUnion,
        Keyword::RawTypeOf,
        Keyword::TemplateTypeOf,
        Keyword::Eq,
        Keyword::Sub,
        Keyword::IsTemplatized,
        Keyword::IsUnknown,
    ];

    /// Map a parsed callee spelling to its keyword.
    pub fn from_name(name: &str) -> Option<Keyword> {
        let keyword = match name {
            "type" => Keyword::Type,
            "union" => Keyword::Union,
            "none" => Keyword::None,
            "all" => Keyword::All,
            "unknown" => Keyword::Unknown,
            "cond" => Keyword::Cond,
            "mapunion" => Keyword::MapUnion,
            "rawTypeOf" => Keyword::RawTypeOf,
            "templateTypeOf" => Keyword::TemplateTypeOf,
            "eq" => Keyword::Eq,
            "sub" => Keyword::Sub,
            "isTemplatized" => Keyword::IsTemplatized,
            "isUnknown" => Keyword::IsUnknown,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Union => "union",
            Keyword::None => "none",
            Keyword::All => "all",
            Keyword::Unknown => "unknown",
            Keyword::Cond => "cond",
            Keyword::MapUnion => "mapunion",
            Keyword::RawTypeOf => "rawTypeOf",
            Keyword::TemplateTypeOf => "templateTypeOf",
            Keyword::Eq => "eq",
            Keyword::Sub => "sub",
            Keyword::IsTemplatized => "isTemplatized",
            Keyword::IsUnknown => "isUnknown",
        }
    }

    /// Operand count accepted by the operator.
    pub const fn arity(self) -> Arity {
        match self {
            Keyword::Type => Arity::AtLeast(1),
            Keyword::Union => Arity::AtLeast(2),
            Keyword::None | Keyword::All | Keyword::Unknown => Arity::Exact(0),
            Keyword::Cond => Arity::Exact(3),
            Keyword::MapUnion
            | Keyword::TemplateTypeOf
            | Keyword::Eq
            | Keyword::Sub => Arity::Exact(2),
            Keyword::RawTypeOf | Keyword::IsTemplatized | Keyword::IsUnknown => Arity::Exact(1),
        }
    }

    /// Whether the operator yields a boolean rather than a type.
    pub const fn is_predicate(self) -> bool {
        matches!(
            self,
            Keyword::Eq | Keyword::Sub | Keyword::IsTemplatized | Keyword::IsUnknown
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
