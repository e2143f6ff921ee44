//! The weighted recursive pick.
//!
//! Drawing from a branch is a two-stage lottery. The branch's own items
//! and each child branch independently pass a threshold trial to enter a
//! candidate pool; one pool entry wins uniformly. Children recurse with a
//! smaller depth budget and a stochastically decayed threshold, so deeper
//! branches are probabilistically, rather than deterministically, less
//! likely to contribute.

use hoard_core::{Item, LootNode};
use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{TableError, TableResult};

/// Depth budget for nested picks. `None` means unlimited nesting.
pub type Depth = Option<u32>;

/// Randomly pick an item from this branch.
///
/// One uniform draw against `threshold` gates the branch's own items; a
/// passing draw on a non-empty branch puts one uniformly chosen item into
/// the pool. If depth budget remains, every child branch in registration
/// order gets its own gate trial and, on success, recurses with the budget
/// reduced by one and a threshold decayed by a fresh `random()/budget`
/// draw. The winner is chosen uniformly from the pool.
///
/// A branch holding no items of its own never yields, even when child
/// branches put candidates into the pool. Callers wanting deep items must
/// roll at a branch that holds items directly.
///
/// A threshold of `f64::INFINITY` forces every gate open.
pub fn random_pick<'a>(
    node: &'a LootNode,
    depth: Depth,
    threshold: f64,
    rng: &mut StdRng,
) -> Option<&'a Item> {
    pick(node, depth.map_or(f64::INFINITY, f64::from), threshold, rng)
}

fn pick<'a>(node: &'a LootNode, budget: f64, threshold: f64, rng: &mut StdRng) -> Option<&'a Item> {
    let own = if rng.random::<f64>() < threshold && !node.items().is_empty() {
        let idx = rng.random_range(0..node.items().len());
        Some(&node.items()[idx])
    } else {
        None
    };

    let mut pool: Vec<&Item> = own.into_iter().collect();
    if budget > 0.0 {
        for child in node.children() {
            if rng.random::<f64>() <= threshold {
                let decayed = threshold - rng.random::<f64>() / budget;
                if let Some(found) = pick(child, budget - 1.0, decayed, rng) {
                    pool.push(found);
                }
            }
        }
    }

    if node.items().is_empty() || pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

/// Resolve `path` (without creating) and pick from the resolved branch.
///
/// A missing branch is an error rather than an empty draw; see
/// [`TableError::BranchNotFound`]. An empty pool at an existing branch is
/// `Ok(None)`.
pub fn roll<'a>(
    root: &'a LootNode,
    catalog_path: &str,
    depth: Depth,
    threshold: f64,
    rng: &mut StdRng,
) -> TableResult<Option<&'a Item>> {
    let branch = root
        .get_branch(catalog_path)
        .ok_or_else(|| TableError::BranchNotFound(catalog_path.to_owned()))?;
    Ok(random_pick(branch, depth, threshold, rng))
}
