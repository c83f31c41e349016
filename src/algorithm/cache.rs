use crate::algorithm::placement::{Placement, placements};
use crate::spatial::tile::Tile;
use crate::spatial::transform::Symmetry;
use std::collections::HashMap;

/// Key for caching placement enumeration results
///
/// Identifies a piece, the board it is laid on and the allowed symmetry by
/// structural identity, so equal tiles built separately share an entry.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlacementKey {
    piece: Tile,
    board: Tile,
    symmetry: Symmetry,
}

impl PlacementKey {
    /// Create a key from a piece, board and symmetry setting
    pub fn new(piece: &Tile, board: &Tile, symmetry: Symmetry) -> Self {
        Self {
            piece: piece.clone(),
            board: board.clone(),
            symmetry,
        }
    }
}

/// Memoization cache for placement enumeration
///
/// A search revisits the same remaining board with the same pieces often;
/// this stores each enumeration the first time it is computed.
#[derive(Default)]
pub struct PlacementCache {
    /// Key to placements mapping
    entries: HashMap<PlacementKey, Vec<Placement>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl PlacementCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached result or compute and store new one
    ///
    /// Uses the provided closure to compute placements only when the key is
    /// not already cached.
    pub fn get_or_compute<F>(&mut self, key: PlacementKey, compute_fn: F) -> &[Placement]
    where
        F: FnOnce() -> Vec<Placement>,
    {
        use std::collections::hash_map::Entry;

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut().as_slice()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn()).as_slice()
            }
        }
    }

    /// Placements of `piece` on `board`, enumerated at most once per key
    pub fn placements(&mut self, piece: &Tile, board: &Tile, symmetry: Symmetry) -> &[Placement] {
        let key = PlacementKey::new(piece, board, symmetry);
        self.get_or_compute(key, || placements(piece, board, symmetry))
    }

    /// Number of cached enumerations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached enumeration and reset statistics
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
