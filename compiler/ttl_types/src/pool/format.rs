//! Type formatting for logs and error messages.

use ttl_ir::StringInterner;

use crate::{Idx, Pool, TypeData};

impl Pool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, interner, &mut buf);
        buf
    }

    /// Format a type into an existing buffer.
    pub fn format_type_into(&self, idx: Idx, interner: &StringInterner, buf: &mut String) {
        match self.data(idx) {
            TypeData::Unknown => buf.push('?'),
            TypeData::All => buf.push('*'),
            TypeData::NoType => buf.push_str("None"),
            TypeData::Named(name) => buf.push_str(interner.lookup(name)),
            TypeData::Union(members) => {
                buf.push('(');
                for (i, &member) in members.iter().enumerate() {
                    if i > 0 {
                        buf.push('|');
                    }
                    self.format_type_into(member, interner, buf);
                }
                buf.push(')');
            }
            TypeData::Applied { base, args } => {
                self.format_type_into(base, interner, buf);
                buf.push('<');
                for (i, &arg) in args.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(arg, interner, buf);
                }
                buf.push('>');
            }
        }
    }
}
