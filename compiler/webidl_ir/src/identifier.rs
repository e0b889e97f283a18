//! Interned Web IDL identifier.
//!
//! Provides compact 32-bit interned identifiers. Identifiers are the only key
//! used to cross-reference and merge IDL definitions.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned identifier.
///
/// Layout: 32-bit index split into shard (4 bits) + local index (28 bits)
/// - Bits 31-28: Shard index (0-15)
/// - Bits 27-0: Local index within shard
///
/// Equality and hashing are by handle, which is equality by value because the
/// interner never hands out two handles for the same string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Identifier(u32);

impl Identifier {
    /// Pre-interned empty string (anonymous special operations).
    pub const EMPTY: Identifier = Identifier(0);

    /// Maximum local index per shard.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Number of shards.
    pub const NUM_SHARDS: usize = 16;

    /// Create from shard and local index.
    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Identifier((shard << 28) | local)
    }

    /// Extract shard index.
    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Extract local index.
    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Identifier(raw)
    }

    /// Whether this is the pre-interned empty identifier.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Hash for Identifier {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier(shard={}, local={})", self.shard(), self.local())
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests;
