//! Drop tables.
//!
//! A drop table is an ordered list of rows, each naming a source branch
//! and how to draw from it: a depth budget, a luck threshold, a stack
//! count, and whether to run a modifier over the clones.

use hoard_core::{Item, LootNode, RangeSpec};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::TableResult;
use crate::modify::apply_modifier;
use crate::pick::roll;

/// How many clones a successful row produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StackSpec {
    /// A fixed count.
    Count(u32),
    /// A string spec: `"a-b"` samples the range, a bare number is a fixed
    /// count. Anything unparsable degrades to 1.
    Spec(String),
}

impl StackSpec {
    /// Resolve the spec to a concrete count.
    pub fn resolve(&self, rng: &mut StdRng) -> u32 {
        match self {
            Self::Count(n) => *n,
            Self::Spec(s) if s.contains('-') => RangeSpec::parse(s)
                .map_or(1, |spec| spec.sample(rng).max(0) as u32),
            Self::Spec(s) => s.parse().unwrap_or(1),
        }
    }
}

/// One rule in a drop table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropRow {
    /// Path of the branch to draw from.
    pub from: String,
    /// Nesting limit for the pick; `None` is unbounded.
    #[serde(default)]
    pub depth: Option<u32>,
    /// Threshold for the pick's gate trials; `None` means 1.0, always
    /// attempt.
    #[serde(default)]
    pub luck: Option<f64>,
    /// Number of clones to produce; `None` means 1.
    #[serde(default)]
    pub stack: Option<StackSpec>,
    /// Whether to apply one randomly chosen modifier to each clone.
    #[serde(default)]
    pub modify: bool,
}

impl DropRow {
    /// A row drawing once from `from` with default depth, luck, and stack.
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            depth: None,
            luck: None,
            stack: None,
            modify: false,
        }
    }

    /// Limit the pick's nesting depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the luck threshold.
    pub fn with_luck(mut self, luck: f64) -> Self {
        self.luck = Some(luck);
        self
    }

    /// Produce a fixed number of clones.
    pub fn with_stack(mut self, count: u32) -> Self {
        self.stack = Some(StackSpec::Count(count));
        self
    }

    /// Sample the clone count from a range spec like `"2-10"`.
    pub fn with_stack_range(mut self, spec: impl Into<String>) -> Self {
        self.stack = Some(StackSpec::Spec(spec.into()));
        self
    }

    /// Run a modifier over each clone.
    pub fn with_modify(mut self) -> Self {
        self.modify = true;
        self
    }
}

/// Evaluate a drop table against a catalog.
///
/// Rows are processed in order. Each row rolls once at its source branch;
/// an empty draw skips the row without error, a missing branch aborts with
/// an error. A successful draw is cloned `stack` times, and when the row
/// asks for modification each clone gets one modifier chosen uniformly
/// from the ones registered on `root` (none registered means the clones
/// pass through untouched). All clones concatenate in row order.
pub fn loot(root: &LootNode, table: &[DropRow], rng: &mut StdRng) -> TableResult<Vec<Item>> {
    let mut rewards = Vec::new();
    for row in table {
        let luck = row.luck.unwrap_or(1.0);
        let Some(drawn) = roll(root, &row.from, row.depth, luck, rng)? else {
            continue;
        };
        let template = drawn.clone();

        let count = row.stack.as_ref().map_or(1, |stack| stack.resolve(rng));
        let modifiers = root.modifiers();
        for _ in 0..count {
            let mut item = template.clone();
            if row.modify && !modifiers.is_empty() {
                let modifier = &modifiers[rng.random_range(0..modifiers.len())];
                apply_modifier(&mut item, modifier, rng);
            }
            rewards.push(item);
        }
    }
    Ok(rewards)
}
