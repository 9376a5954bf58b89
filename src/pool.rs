//! Tile text pool: loading, validation, and per-card sampling.

use std::path::Path;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::CardError;

/// Marker text placed in the center cell when a free space is requested.
pub const FREE_SPACE: &str = "FREE";

/// A pool of tile texts loaded from a newline-delimited file.
#[derive(Debug, Clone)]
pub struct TilePool {
    entries: Vec<String>,
}

impl TilePool {
    /// Load a pool from a file, one entry per line.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. Lines are trimmed and
    /// blank lines are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, CardError> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        Ok(Self { entries })
    }

    /// Build a pool from entries directly.
    #[cfg(test)]
    fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Number of usable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    #[allow(dead_code)] // len()'s conventional companion
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that the pool can fill a board of `needed` tiles.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InsufficientInput`] if it cannot.
    pub fn ensure(&self, needed: usize) -> Result<(), CardError> {
        if self.entries.len() < needed {
            return Err(CardError::InsufficientInput { needed, available: self.entries.len() });
        }
        Ok(())
    }

    /// Sample `count` entries without replacement.
    ///
    /// Callers must have checked [`TilePool::ensure`] first; sampling more
    /// entries than exist returns everything the pool has.
    #[must_use]
    pub fn sample(&self, count: usize, rng: &mut SmallRng) -> Vec<String> {
        self.entries.choose_multiple(rng, count).cloned().collect()
    }
}

/// RNG for one card.
///
/// With an explicit seed, each card index derives its own deterministic
/// stream so parallel workers stay reproducible regardless of scheduling.
/// Without one, each worker seeds from entropy.
#[must_use]
pub fn card_rng(seed: Option<u64>, card_index: usize) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(card_index as u64)),
        None => SmallRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(n: usize) -> TilePool {
        TilePool::from_entries((0..n).map(|i| format!("word-{i}")).collect())
    }

    #[test]
    fn load_trims_and_drops_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.txt");
        std::fs::write(&path, "alpha\n\n  beta  \n\ngamma\n").unwrap();
        let pool = TilePool::load(&path).unwrap();
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn load_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.txt");
        std::fs::write(&path, b"alpha\n\xff\xfe\nbeta\n").unwrap();
        let pool = TilePool::load(&path).unwrap();
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(TilePool::load(Path::new("/nonexistent/pool.txt")).is_err());
    }

    #[test]
    fn ensure_rejects_small_pool() {
        let err = pool_of(10).ensure(25).unwrap_err();
        match err {
            CardError::InsufficientInput { needed, available } => {
                assert_eq!(needed, 25);
                assert_eq!(available, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let pool = pool_of(40);
        let mut rng = card_rng(Some(7), 0);
        let mut tiles = pool.sample(25, &mut rng);
        assert_eq!(tiles.len(), 25);
        tiles.sort();
        tiles.dedup();
        assert_eq!(tiles.len(), 25);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let pool = pool_of(40);
        let a = pool.sample(25, &mut card_rng(Some(42), 3));
        let b = pool.sample(25, &mut card_rng(Some(42), 3));
        assert_eq!(a, b);
    }

    #[test]
    fn card_index_varies_the_stream() {
        let pool = pool_of(40);
        let a = pool.sample(25, &mut card_rng(Some(42), 0));
        let b = pool.sample(25, &mut card_rng(Some(42), 1));
        assert_ne!(a, b);
    }
}
