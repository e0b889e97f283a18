//! Generator-facing hints that carry no IDL semantics.
//!
//! Merged across fragments with last-fragment-wins per field. Every time a later
//! fragment replaces a value set by an earlier one, a [`GeneratorOverride`] is
//! produced so the generator can explain where a name came from.

use crate::DebugInfo;

/// Hints for the code generator.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CodeGeneratorInfo {
    name_override: Option<String>,
    header_path: Option<String>,
    skip_emission: Option<bool>,
}

/// A field replaced by a later fragment during merge.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratorOverride {
    /// Which field was replaced.
    pub field: &'static str,
    /// The value that was replaced.
    pub previous: String,
    /// The value that won.
    pub current: String,
    /// Where the winning value came from.
    pub location: DebugInfo,
}

impl CodeGeneratorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `name` instead of the IDL identifier for the generated class.
    #[must_use]
    pub fn with_name_override(mut self, name: impl Into<String>) -> Self {
        self.name_override = Some(name.into());
        self
    }

    /// Header the generated binding should include.
    #[must_use]
    pub fn with_header_path(mut self, path: impl Into<String>) -> Self {
        self.header_path = Some(path.into());
        self
    }

    /// Suppress (or force) emission of bindings for this definition.
    #[must_use]
    pub fn with_skip_emission(mut self, skip: bool) -> Self {
        self.skip_emission = Some(skip);
        self
    }

    pub fn name_override(&self) -> Option<&str> {
        self.name_override.as_deref()
    }

    pub fn header_path(&self) -> Option<&str> {
        self.header_path.as_deref()
    }

    /// Whether emission is skipped. Unset means emit.
    pub fn skip_emission(&self) -> bool {
        self.skip_emission.unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.name_override.is_none() && self.header_path.is_none() && self.skip_emission.is_none()
    }

    /// Lay `later` over `self`: every field `later` sets wins.
    ///
    /// Returns the overrides where a differing earlier value was replaced.
    #[must_use]
    pub fn overlay(
        self,
        later: &CodeGeneratorInfo,
        later_location: &DebugInfo,
    ) -> (CodeGeneratorInfo, Vec<GeneratorOverride>) {
        let mut overrides = Vec::new();
        let mut record = |field: &'static str, previous: String, current: String| {
            overrides.push(GeneratorOverride {
                field,
                previous,
                current,
                location: later_location.clone(),
            });
        };

        let name_override = overlay_field(
            self.name_override,
            later.name_override.as_ref(),
            |previous, current| record("name_override", previous.clone(), current.clone()),
        );
        let header_path = overlay_field(
            self.header_path,
            later.header_path.as_ref(),
            |previous, current| record("header_path", previous.clone(), current.clone()),
        );
        let skip_emission = overlay_field(
            self.skip_emission,
            later.skip_emission.as_ref(),
            |previous, current| record("skip_emission", previous.to_string(), current.to_string()),
        );

        (
            CodeGeneratorInfo {
                name_override,
                header_path,
                skip_emission,
            },
            overrides,
        )
    }
}

fn overlay_field<T: Clone + PartialEq>(
    earlier: Option<T>,
    later: Option<&T>,
    mut on_override: impl FnMut(&T, &T),
) -> Option<T> {
    match (earlier, later) {
        (Some(previous), Some(current)) => {
            if previous != *current {
                on_override(&previous, current);
            }
            Some(current.clone())
        }
        (earlier, None) => earlier,
        (None, Some(current)) => Some(current.clone()),
    }
}

#[cfg(test)]
mod tests;
