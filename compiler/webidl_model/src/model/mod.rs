//! The frozen model: every resolved definition, read-only.
//!
//! Definitions live in one arena indexed by [`DefId`]. A [`TypeHandle`] is an
//! identifier plus a `DefId`, so following a reference is an index into the
//! arena and mutually referring definitions need no shared ownership.
//!
//! The model is `Send + Sync` and has no interior mutability; any number of
//! generator workers may read it at once without locking.

mod definitions;

use rustc_hash::FxHashMap;
use webidl_ir::{DefId, Identifier, Kind, SharedInterner, StringLookup, TypeHandle, WithIdentifier};

pub use definitions::{
    CallbackFunction, CallbackInterface, Declaration, Dictionary, Enumeration, Interface,
    InterfaceMixin, Namespace, Typedef, UserDefinedType,
};

/// Read-only mapping from identifier to resolved definition.
#[derive(Clone, Debug)]
pub struct FrozenModel {
    /// Definitions indexed by `DefId`, ordered by identifier spelling.
    definitions: Vec<UserDefinedType>,
    by_identifier: FxHashMap<Identifier, DefId>,
    interner: SharedInterner,
}

impl FrozenModel {
    /// Install resolved definitions. `definitions[i]` must be `DefId(i)`.
    pub(crate) fn new(definitions: Vec<UserDefinedType>, interner: SharedInterner) -> Self {
        let by_identifier = definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| (definition.identifier(), def_id(index)))
            .collect();
        FrozenModel {
            definitions,
            by_identifier,
            interner,
        }
    }

    pub fn get(&self, identifier: Identifier) -> Option<&UserDefinedType> {
        let def = self.by_identifier.get(&identifier)?;
        self.definitions.get(def.index())
    }

    /// Look up by spelling. Never interns `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&UserDefinedType> {
        self.get(self.interner.get(name)?)
    }

    /// Follow a handle produced by this model's resolver.
    ///
    /// # Panics
    ///
    /// Panics if the handle belongs to a different model.
    #[track_caller]
    pub fn resolve(&self, handle: TypeHandle) -> &UserDefinedType {
        match self.definitions.get(handle.def_id().index()) {
            Some(definition) if definition.identifier() == handle.identifier() => definition,
            _ => panic!(
                "handle {:?} for `{}` does not belong to this model",
                handle.def_id(),
                self.interner.lookup(handle.identifier())
            ),
        }
    }

    pub fn def_id(&self, identifier: Identifier) -> Option<DefId> {
        self.by_identifier.get(&identifier).copied()
    }

    /// Every definition, ordered by identifier spelling.
    pub fn iter(&self) -> std::slice::Iter<'_, UserDefinedType> {
        self.definitions.iter()
    }

    /// Every definition of `kind`, ordered by identifier spelling.
    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = &UserDefinedType> + '_ {
        self.definitions
            .iter()
            .filter(move |definition| definition.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Spelling of an identifier.
    pub fn name(&self, identifier: Identifier) -> &str {
        self.interner.lookup(identifier)
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }
}

impl StringLookup for FrozenModel {
    fn lookup(&self, id: Identifier) -> &str {
        self.name(id)
    }
}

impl<'a> IntoIterator for &'a FrozenModel {
    type Item = &'a UserDefinedType;
    type IntoIter = std::slice::Iter<'a, UserDefinedType>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "definition count is bounded by interned identifiers, which fit in u32"
)]
pub(crate) fn def_id(index: usize) -> DefId {
    DefId::from_raw(index as u32)
}
