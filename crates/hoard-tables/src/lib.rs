//! Drop-table engine for Hoard.
//!
//! Draws items from a `hoard-core` catalog: the weighted recursive pick
//! with stochastic threshold decay, path-addressed rolls, drop-table
//! evaluation with stacking, and modifier application. All randomness
//! flows through a caller-supplied `StdRng`, so seeded runs reproduce
//! their draws exactly.

/// Error types for the drop-table engine.
pub mod error;
/// Modifier application to drawn clones.
pub mod modify;
/// The weighted recursive pick and path-addressed rolls.
pub mod pick;
/// Seeded looting sessions.
pub mod session;
/// Drop rows, stacking, and table evaluation.
pub mod table;

/// Re-export error types.
pub use error::{TableError, TableResult};
/// Re-export modifier application.
pub use modify::apply_modifier;
/// Re-export pick operations.
pub use pick::{Depth, random_pick, roll};
/// Re-export session types.
pub use session::{LootConfig, LootSession};
/// Re-export table types.
pub use table::{DropRow, StackSpec, loot};
