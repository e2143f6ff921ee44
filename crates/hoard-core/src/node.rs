//! The loot catalog tree.
//!
//! A [`LootNode`] owns its items, its child branches, and the modifiers
//! registered on it. Branches are created lazily on first reference by a
//! creating lookup and live as long as the tree; there is no removal.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::modifier::Modifier;
use crate::path;

/// A node in the loot catalog: a named branch holding items, child
/// branches, and per-node modifiers.
///
/// Child registration order is tracked separately from the branch map so
/// that iteration is deterministic under a seeded random source.
#[derive(Debug)]
pub struct LootNode {
    name: String,
    items: Vec<Item>,
    branches: HashMap<String, LootNode>,
    branch_names: Vec<String>,
    modifiers: Vec<Modifier>,
}

impl LootNode {
    /// Create a node with the given name.
    ///
    /// Leading and trailing separators are stripped; a `/` left inside the
    /// name is a hard error: a node name must be a single path segment.
    pub fn new(name: &str) -> CoreResult<Self> {
        let cleaned = path::clean(name);
        if cleaned.contains('/') {
            return Err(CoreError::InvalidName(name.to_owned()));
        }
        Ok(Self::segment(cleaned))
    }

    /// Create the conventional root node, named `root`.
    pub fn root() -> Self {
        Self::segment("root")
    }

    // Internal constructor for names already known to be clean segments.
    fn segment(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            items: Vec::new(),
            branches: HashMap::new(),
            branch_names: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// This node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items held directly by this node.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Child branch names in registration order.
    pub fn branch_names(&self) -> &[String] {
        &self.branch_names
    }

    /// Child branches in registration order.
    pub fn children(&self) -> impl Iterator<Item = &LootNode> {
        self.branch_names
            .iter()
            .filter_map(|name| self.branches.get(name))
    }

    /// Modifiers registered on this node.
    ///
    /// Modifiers are per-node state: they apply only to loot drawn through
    /// this node's table evaluation, and descendants do not inherit them.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Append an item to this node's own items. Chainable.
    pub fn add(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Append an item to the branch at `path`, creating it as needed.
    /// Returns this node, so adds at different paths chain.
    pub fn add_at(&mut self, item: Item, catalog_path: &str) -> &mut Self {
        self.branch(catalog_path).items.push(item);
        self
    }

    /// Resolve the branch at `path` relative to this node, creating any
    /// missing segments on the way.
    ///
    /// An empty path resolves to this node, and so does a single segment
    /// equal to this node's own name.
    pub fn branch(&mut self, catalog_path: &str) -> &mut LootNode {
        let segments = path::split(catalog_path);
        match segments.as_slice() {
            [] => self,
            [single] => {
                if *single == self.name {
                    self
                } else {
                    self.ensure_child(single)
                }
            }
            [head, rest @ ..] => {
                let tail = rest.join("/");
                self.ensure_child(head).branch(&tail)
            }
        }
    }

    /// Resolve the branch at `path` without creating anything. Returns
    /// `None` when any segment on the way does not exist. Lookup is
    /// case-sensitive, exact match.
    pub fn get_branch(&self, catalog_path: &str) -> Option<&LootNode> {
        let segments = path::split(catalog_path);
        match segments.as_slice() {
            [] => Some(self),
            [single] => {
                if *single == self.name {
                    Some(self)
                } else {
                    self.branches.get(*single)
                }
            }
            [head, rest @ ..] => {
                let tail = rest.join("/");
                self.branches.get(*head)?.get_branch(&tail)
            }
        }
    }

    /// All items in this node and every descendant branch, pre-order,
    /// children in registration order. Recomputed on every call.
    pub fn all_items(&self) -> Vec<&Item> {
        let mut all: Vec<&Item> = self.items.iter().collect();
        for child in self.children() {
            all.extend(child.all_items());
        }
        all
    }

    /// Replace this node's modifier list. Chainable.
    pub fn set_modifiers(&mut self, modifiers: Vec<Modifier>) -> &mut Self {
        self.modifiers = modifiers;
        self
    }

    /// Append a modifier to this node's list. Chainable.
    pub fn add_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    fn ensure_child(&mut self, name: &str) -> &mut LootNode {
        match self.branches.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.branch_names.push(name.to_owned());
                entry.insert(LootNode::segment(name))
            }
        }
    }
}

impl Default for LootNode {
    fn default() -> Self {
        Self::root()
    }
}
