//! Type expressions, before and after resolution.
//!
//! [`RawType`] is what the parser produces: every non-composite type is just a
//! name. [`IdlType`] is the resolved form stored in the frozen model: every name
//! has become either a [`BuiltinType`] or a [`TypeHandle`].
//!
//! # Circular references
//!
//! A `TypeHandle` is an identifier plus a dense index into the frozen model's
//! arena. It owns nothing and is dereferenced on demand, so `A` referring to
//! `B` referring to `A` is just two integers.

use std::fmt::{self, Write};

use crate::{BuiltinType, Identifier, StringLookup};

/// Dense index of a definition in the frozen model arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct DefId(u32);

impl DefId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DefId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A resolved reference to a user-defined type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeHandle {
    identifier: Identifier,
    def: DefId,
}

impl TypeHandle {
    pub const fn new(identifier: Identifier, def: DefId) -> Self {
        TypeHandle { identifier, def }
    }

    pub const fn identifier(self) -> Identifier {
        self.identifier
    }

    pub const fn def_id(self) -> DefId {
        self.def
    }
}

/// A type expression as written, with names not yet resolved.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawType {
    /// A builtin or user-defined type name: `long`, `Node`.
    Named(Identifier),
    /// `T?`
    Nullable(Box<RawType>),
    /// `sequence<T>`
    Sequence(Box<RawType>),
    /// `FrozenArray<T>`
    FrozenArray(Box<RawType>),
    /// `ObservableArray<T>`
    ObservableArray(Box<RawType>),
    /// `record<K, V>`
    Record {
        key: Box<RawType>,
        value: Box<RawType>,
    },
    /// `Promise<T>`
    Promise(Box<RawType>),
    /// `(A or B)`
    Union(Vec<RawType>),
}

impl RawType {
    pub fn named(identifier: Identifier) -> Self {
        RawType::Named(identifier)
    }

    #[must_use]
    pub fn nullable(self) -> Self {
        RawType::Nullable(Box::new(self))
    }

    pub fn sequence(element: RawType) -> Self {
        RawType::Sequence(Box::new(element))
    }

    pub fn promise(result: RawType) -> Self {
        RawType::Promise(Box::new(result))
    }

    pub fn record(key: RawType, value: RawType) -> Self {
        RawType::Record {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Render with identifiers spelled out.
    pub fn display(&self, lookup: &impl StringLookup) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_raw(&mut out, self, lookup);
        out
    }
}

/// A resolved type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdlType {
    Builtin(BuiltinType),
    Reference(TypeHandle),
    Nullable(Box<IdlType>),
    Sequence(Box<IdlType>),
    FrozenArray(Box<IdlType>),
    ObservableArray(Box<IdlType>),
    Record {
        key: Box<IdlType>,
        value: Box<IdlType>,
    },
    Promise(Box<IdlType>),
    Union(Vec<IdlType>),
}

impl IdlType {
    /// The builtin, if this is a bare builtin type.
    pub fn as_builtin(&self) -> Option<BuiltinType> {
        match self {
            IdlType::Builtin(builtin) => Some(*builtin),
            _ => None,
        }
    }

    /// The handle, if this is a bare reference to a user-defined type.
    pub fn as_reference(&self) -> Option<TypeHandle> {
        match self {
            IdlType::Reference(handle) => Some(*handle),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, IdlType::Nullable(_))
    }

    /// The type with one level of `?` removed.
    pub fn without_nullable(&self) -> &IdlType {
        match self {
            IdlType::Nullable(inner) => inner,
            other => other,
        }
    }

    /// Every handle reachable inside this type, in source order.
    pub fn references(&self) -> Vec<TypeHandle> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut Vec<TypeHandle>) {
        match self {
            IdlType::Builtin(_) => {}
            IdlType::Reference(handle) => out.push(*handle),
            IdlType::Nullable(inner)
            | IdlType::Sequence(inner)
            | IdlType::FrozenArray(inner)
            | IdlType::ObservableArray(inner)
            | IdlType::Promise(inner) => inner.collect_references(out),
            IdlType::Record { key, value } => {
                key.collect_references(out);
                value.collect_references(out);
            }
            IdlType::Union(members) => {
                for member in members {
                    member.collect_references(out);
                }
            }
        }
    }

    /// Render with identifiers spelled out.
    pub fn display(&self, lookup: &impl StringLookup) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_resolved(&mut out, self, lookup);
        out
    }
}

impl From<BuiltinType> for IdlType {
    fn from(builtin: BuiltinType) -> Self {
        IdlType::Builtin(builtin)
    }
}

fn write_raw(out: &mut String, ty: &RawType, lookup: &impl StringLookup) -> fmt::Result {
    match ty {
        RawType::Named(id) => out.write_str(lookup.lookup(*id)),
        RawType::Nullable(inner) => {
            write_raw(out, inner, lookup)?;
            out.write_char('?')
        }
        RawType::Sequence(inner) => wrap_raw(out, "sequence", inner, lookup),
        RawType::FrozenArray(inner) => wrap_raw(out, "FrozenArray", inner, lookup),
        RawType::ObservableArray(inner) => wrap_raw(out, "ObservableArray", inner, lookup),
        RawType::Promise(inner) => wrap_raw(out, "Promise", inner, lookup),
        RawType::Record { key, value } => {
            out.write_str("record<")?;
            write_raw(out, key, lookup)?;
            out.write_str(", ")?;
            write_raw(out, value, lookup)?;
            out.write_char('>')
        }
        RawType::Union(members) => {
            out.write_char('(')?;
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.write_str(" or ")?;
                }
                write_raw(out, member, lookup)?;
            }
            out.write_char(')')
        }
    }
}

fn wrap_raw(
    out: &mut String,
    wrapper: &str,
    inner: &RawType,
    lookup: &impl StringLookup,
) -> fmt::Result {
    write!(out, "{wrapper}<")?;
    write_raw(out, inner, lookup)?;
    out.write_char('>')
}

fn write_resolved(out: &mut String, ty: &IdlType, lookup: &impl StringLookup) -> fmt::Result {
    match ty {
        IdlType::Builtin(builtin) => out.write_str(builtin.name()),
        IdlType::Reference(handle) => out.write_str(lookup.lookup(handle.identifier())),
        IdlType::Nullable(inner) => {
            write_resolved(out, inner, lookup)?;
            out.write_char('?')
        }
        IdlType::Sequence(inner) => wrap_resolved(out, "sequence", inner, lookup),
        IdlType::FrozenArray(inner) => wrap_resolved(out, "FrozenArray", inner, lookup),
        IdlType::ObservableArray(inner) => wrap_resolved(out, "ObservableArray", inner, lookup),
        IdlType::Promise(inner) => wrap_resolved(out, "Promise", inner, lookup),
        IdlType::Record { key, value } => {
            out.write_str("record<")?;
            write_resolved(out, key, lookup)?;
            out.write_str(", ")?;
            write_resolved(out, value, lookup)?;
            out.write_char('>')
        }
        IdlType::Union(members) => {
            out.write_char('(')?;
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.write_str(" or ")?;
                }
                write_resolved(out, member, lookup)?;
            }
            out.write_char(')')
        }
    }
}

fn wrap_resolved(
    out: &mut String,
    wrapper: &str,
    inner: &IdlType,
    lookup: &impl StringLookup,
) -> fmt::Result {
    write!(out, "{wrapper}<")?;
    write_resolved(out, inner, lookup)?;
    out.write_char('>')
}

#[cfg(test)]
mod tests;
