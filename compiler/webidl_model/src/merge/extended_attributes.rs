//! Union of extended attributes across fragments.

use webidl_ir::{DebugInfo, ExtendedAttribute, ExtendedAttributes};

use crate::ExtendedAttributePolicy;

/// A non-repeatable attribute given two different values.
pub(super) struct AttributeConflict {
    pub key: String,
    pub first: DebugInfo,
    pub second: DebugInfo,
}

/// Accumulates attributes fragment by fragment, in fragment order.
pub(super) struct ExtendedAttributeMerger<'a> {
    policy: &'a ExtendedAttributePolicy,
    /// Each entry with the location of the fragment that first gave it.
    entries: Vec<(ExtendedAttribute, DebugInfo)>,
}

impl<'a> ExtendedAttributeMerger<'a> {
    pub fn new(policy: &'a ExtendedAttributePolicy) -> Self {
        ExtendedAttributeMerger {
            policy,
            entries: Vec::new(),
        }
    }

    /// Add one fragment's attributes.
    ///
    /// Repeatable attributes keep every distinct entry. A non-repeatable
    /// attribute restated with the same value is kept once.
    pub fn absorb(
        &mut self,
        attributes: &ExtendedAttributes,
        location: &DebugInfo,
    ) -> Vec<AttributeConflict> {
        let mut conflicts = Vec::new();
        for attribute in attributes {
            if self.policy.is_repeatable(attribute.key()) {
                if !self.entries.iter().any(|(entry, _)| entry == attribute) {
                    self.entries.push((attribute.clone(), location.clone()));
                }
                continue;
            }

            match self
                .entries
                .iter()
                .find(|(entry, _)| entry.key() == attribute.key())
            {
                None => self.entries.push((attribute.clone(), location.clone())),
                Some((entry, _)) if entry.value() == attribute.value() => {}
                Some((_, first)) => conflicts.push(AttributeConflict {
                    key: attribute.key().to_string(),
                    first: first.clone(),
                    second: location.clone(),
                }),
            }
        }
        conflicts
    }

    pub fn finish(self) -> ExtendedAttributes {
        self.entries.into_iter().map(|(entry, _)| entry).collect()
    }
}
