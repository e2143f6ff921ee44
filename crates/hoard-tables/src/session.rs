//! A seeded looting session.
//!
//! Owns the catalog and a reproducible random source, so a host can fix a
//! seed and replay the exact same sequence of draws.

use hoard_core::{Item, LootNode};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::TableResult;
use crate::pick::{self, Depth};
use crate::table::{self, DropRow};

/// Configuration for a looting session.
#[derive(Debug, Clone)]
pub struct LootConfig {
    /// RNG seed for reproducible draws.
    pub seed: u64,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl LootConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A looting session: a catalog plus a seeded random source.
#[derive(Debug)]
pub struct LootSession {
    root: LootNode,
    rng: StdRng,
}

impl LootSession {
    /// Start a session over the given catalog.
    pub fn new(root: LootNode, config: &LootConfig) -> Self {
        Self {
            root,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The catalog root.
    pub fn root(&self) -> &LootNode {
        &self.root
    }

    /// Mutable access to the catalog root, for building and for modifier
    /// registration.
    pub fn root_mut(&mut self) -> &mut LootNode {
        &mut self.root
    }

    /// Roll once at a branch, returning a clone of the drawn item.
    pub fn roll(&mut self, catalog_path: &str, depth: Depth, luck: f64) -> TableResult<Option<Item>> {
        let picked = pick::roll(&self.root, catalog_path, depth, luck, &mut self.rng)?;
        Ok(picked.cloned())
    }

    /// Evaluate a drop table against the catalog.
    pub fn loot(&mut self, drops: &[DropRow]) -> TableResult<Vec<Item>> {
        table::loot(&self.root, drops, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(LootConfig::default().seed, 42);
        assert_eq!(LootConfig::default().with_seed(7).seed, 7);
    }

    #[test]
    fn session_rolls_clones() {
        let mut root = LootNode::root();
        root.add(Item::new("Stuff"));
        let mut session = LootSession::new(root, &LootConfig::default());

        let drawn = session.roll("/", Some(0), f64::INFINITY).unwrap().unwrap();
        assert_eq!(drawn.name, "Stuff");
        // the clone is independent of the stored template
        assert_eq!(session.root().items()[0].name, "Stuff");
    }
}
