//! Build component tags.

use crate::Identifier;

/// The build component that contributed a fragment (e.g. `core`, `modules`).
///
/// Generated output is partitioned by component, so the tag survives merging:
/// a merged definition keeps the set of all contributing components and each
/// member keeps the component it came from.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct ComponentTag(Identifier);

impl ComponentTag {
    /// The unnamed component, used when the orchestrator does not partition.
    pub const UNSPECIFIED: ComponentTag = ComponentTag(Identifier::EMPTY);

    pub const fn new(name: Identifier) -> Self {
        ComponentTag(name)
    }

    /// The interned component name.
    pub const fn identifier(self) -> Identifier {
        self.0
    }
}
