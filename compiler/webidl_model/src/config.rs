//! Model construction settings.
//!
//! Plain data handed to [`build_model`](crate::build_model) by reference. The
//! surrounding build orchestrator owns reading these from wherever it likes.

use rustc_hash::FxHashSet;

/// Extended attributes that may legitimately appear more than once.
const DEFAULT_REPEATABLE: [&str; 3] = ["Exposed", "LegacyFactoryFunction", "LegacyWindowAlias"];

/// Which extended attributes accumulate across fragments.
///
/// A repeatable attribute keeps every distinct value any fragment gives it. A
/// non-repeatable attribute may be restated with the same value, but two
/// different values are a merge error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedAttributePolicy {
    repeatable: FxHashSet<String>,
}

impl ExtendedAttributePolicy {
    /// A policy under which every attribute is non-repeatable.
    pub fn strict() -> Self {
        ExtendedAttributePolicy {
            repeatable: FxHashSet::default(),
        }
    }

    /// Also treat `name` as repeatable.
    #[must_use]
    pub fn with_repeatable(mut self, name: impl Into<String>) -> Self {
        self.repeatable.insert(name.into());
        self
    }

    pub fn is_repeatable(&self, name: &str) -> bool {
        self.repeatable.contains(name)
    }
}

impl Default for ExtendedAttributePolicy {
    fn default() -> Self {
        DEFAULT_REPEATABLE
            .into_iter()
            .fold(Self::strict(), Self::with_repeatable)
    }
}

/// Configuration for one model construction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    /// Merge policy for extended attributes.
    pub extended_attributes: ExtendedAttributePolicy,
    /// Merge and resolve independent definitions on the rayon pool.
    pub parallel: bool,
}

impl ModelConfig {
    /// Default policy, single-threaded.
    ///
    /// Output is identical either way; this is for callers already running
    /// inside their own worker pool.
    pub fn sequential() -> Self {
        ModelConfig {
            parallel: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extended_attributes(mut self, policy: ExtendedAttributePolicy) -> Self {
        self.extended_attributes = policy;
        self
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            extended_attributes: ExtendedAttributePolicy::default(),
            parallel: true,
        }
    }
}
