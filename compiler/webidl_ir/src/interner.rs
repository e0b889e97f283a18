//! Sharded string interner for Web IDL identifiers.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access
//! via per-shard locking, so parser workers can intern names while other
//! workers register fragments.

use super::{BuiltinType, Identifier};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded capacity.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                Identifier::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard for concurrent read/write access.
/// Wrap in [`SharedInterner`] for sharing across threads.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Identifier::NUM_SHARDS],
    /// Total count of interned strings across all shards.
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the builtin type spellings pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        // Start with 1 for the empty string pre-interned in shard 0
        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        for builtin in BuiltinType::ALL {
            interner.intern(builtin.name());
        }
        interner
    }

    /// Compute shard for a string based on its hash.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Identifier::NUM_SHARDS
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    #[inline]
    fn shard_id(shard_idx: usize) -> u32 {
        shard_idx as u32
    }

    /// Try to intern a string, returning its identifier or an error on overflow.
    #[inline]
    pub fn try_intern(&self, s: &str) -> Result<Identifier, InternError> {
        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx];

        // Fast path: already interned
        if let Some(&local) = shard.read().map.get(s) {
            return Ok(Identifier::new(Self::shard_id(shard_idx), local));
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(Identifier::new(Self::shard_id(shard_idx), local));
        }

        let count = guard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Identifier::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Identifier::new(Self::shard_id(shard_idx), local))
    }

    /// Intern a string, returning its identifier.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Identifier {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up an already-interned string without interning it.
    pub fn get(&self, s: &str) -> Option<Identifier> {
        let shard_idx = Self::shard_for(s);
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&local| Identifier::new(Self::shard_id(shard_idx), local))
    }

    /// Look up the string for an identifier.
    pub fn lookup(&self, id: Identifier) -> &str {
        let guard = self.shards[id.shard()].read();
        guard.strings[id.local()]
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned identifiers.
///
/// Lets higher-level crates format identifiers without depending on the
/// concrete interner.
pub trait StringLookup {
    /// Look up the string for an interned identifier.
    fn lookup(&self, id: Identifier) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, id: Identifier) -> &str {
        StringInterner::lookup(self, id)
    }
}

/// Shared interner for thread-safe interning across the registration,
/// merge and resolution phases.
///
/// Parser workers clone this handle; the frozen model keeps one so the code
/// generator can turn identifiers back into strings.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for SharedInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedInterner")
            .field("len", &self.len())
            .finish()
    }
}
