//! Declaration fragment registry.
//!
//! Collects fragments from any number of parser workers. Registration locks
//! only the shard owning the fragment's identifier, reusing the interner's
//! shard bits, so workers registering unrelated definitions rarely contend.
//!
//! Fragment order within one identifier is decided by source order (the
//! input file index assigned by the orchestrator), with arrival order only
//! breaking ties. Thread scheduling therefore cannot change merge results.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use webidl_ir::{Fragment, Identifier, WithIdentifier};

/// Fragments of every identifier, in the order the merge engine consumes them.
pub type FragmentsByIdentifier = Vec<(Identifier, Vec<Fragment>)>;

#[derive(Default)]
struct RegistryShard {
    /// Fragments per identifier, in arrival order.
    fragments: FxHashMap<Identifier, Vec<Fragment>>,
}

/// Thread-safe, append-only collection of declaration fragments.
pub struct IdentifierIrMap {
    shards: [Mutex<RegistryShard>; Identifier::NUM_SHARDS],
    fragment_count: AtomicUsize,
}

impl IdentifierIrMap {
    pub fn new() -> Self {
        IdentifierIrMap {
            shards: std::array::from_fn(|_| Mutex::new(RegistryShard::default())),
            fragment_count: AtomicUsize::new(0),
        }
    }

    /// Add a fragment. Never fails; duplicates are the merge engine's concern.
    pub fn register(&self, fragment: Fragment) {
        let identifier = fragment.identifier();
        tracing::trace!(identifier = identifier.raw(), kind = %fragment.kind(), "register fragment");
        self.shards[identifier.shard()]
            .lock()
            .fragments
            .entry(identifier)
            .or_default()
            .push(fragment);
        self.fragment_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Fragments registered for `identifier`, ordered by source order.
    pub fn fragments_for(&self, identifier: Identifier) -> Vec<Fragment> {
        let shard = self.shards[identifier.shard()].lock();
        let mut fragments = shard
            .fragments
            .get(&identifier)
            .cloned()
            .unwrap_or_default();
        sort_by_source_order(&mut fragments);
        fragments
    }

    /// Every identifier with at least one fragment, in handle order.
    pub fn all_identifiers(&self) -> Vec<Identifier> {
        let mut identifiers: Vec<Identifier> = self
            .shards
            .iter()
            .flat_map(|shard| shard.lock().fragments.keys().copied().collect::<Vec<_>>())
            .collect();
        identifiers.sort_unstable_by_key(|identifier| identifier.raw());
        identifiers
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.lock().fragments.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fragment_count() == 0
    }

    /// Number of fragments across all identifiers.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count.load(Ordering::Relaxed)
    }

    /// Close registration and hand every fragment list to the merge engine.
    ///
    /// Taking `self` by value is the barrier between the parallel parsing
    /// phase and the whole-model passes.
    pub fn into_fragments(self) -> FragmentsByIdentifier {
        let mut all: FragmentsByIdentifier = self
            .shards
            .into_iter()
            .flat_map(|shard| shard.into_inner().fragments)
            .map(|(identifier, mut fragments)| {
                sort_by_source_order(&mut fragments);
                (identifier, fragments)
            })
            .collect();
        all.sort_unstable_by_key(|(identifier, _)| identifier.raw());
        all
    }
}

impl Default for IdentifierIrMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdentifierIrMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentifierIrMap")
            .field("identifiers", &self.len())
            .field("fragments", &self.fragment_count())
            .finish()
    }
}

/// Stable sort, so arrival order breaks ties between equal source orders.
fn sort_by_source_order(fragments: &mut [Fragment]) {
    fragments.sort_by_key(Fragment::source_order);
}

#[cfg(test)]
mod tests;
