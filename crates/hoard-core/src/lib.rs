//! Core types for Hoard: the loot catalog tree, items, and modifier
//! grammars.
//!
//! This crate defines the data model the drop-table engine evaluates. It
//! is free of any drawing logic: you can build a [`LootNode`] tree
//! programmatically, register [`Modifier`] templates on it, and hand it to
//! `hoard-tables` to draw from.

/// Error types used throughout the crate.
pub mod error;
/// Items and their scalar property values.
pub mod item;
/// Modifier templates and their per-property value kinds.
pub mod modifier;
/// The catalog tree node.
pub mod node;
/// Slash-delimited catalog path handling.
pub mod path;
/// Integer range specs (`"a-b"`) and sampling.
pub mod range;
/// Arithmetic modifier rules (`+N`, `*N`, `**N`, ...).
pub mod rule;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, PropValue};
/// Re-export modifier types.
pub use modifier::{Modifier, ModifierFn, ModifierValue};
/// Re-export the catalog tree node.
pub use node::LootNode;
/// Re-export the range spec.
pub use range::RangeSpec;
/// Re-export the rule types.
pub use rule::{ModifierOp, ModifierRule};
