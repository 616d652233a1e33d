//! Directory tree walking logic
//!
//! `TreeWalker` visits the filesystem in pre-order and hands each entry to a
//! `TreeOutput` as a `TraversalNode`, using O(depth) memory. Directories past
//! the depth cutoff are pruned rather than read and hidden.

mod config;
mod node;
mod walker;

pub use config::{ErrorPolicy, WalkerConfig};
pub use node::{NodeKind, TraversalNode, level_of, relative_path};
pub use walker::{TreeOutput, TreeWalker, WalkSummary};
