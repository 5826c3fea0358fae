use serde::{Deserialize, Serialize};

use crate::pack::PlacementStrategy;

/// Configuration of a packing run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    /// Placement strategy to pack with
    pub strategy: PlacementStrategy,
    /// Order the size groups descending (true) or ascending (false) before placement
    pub large_items_at_top: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            strategy: PlacementStrategy::Sequential,
            large_items_at_top: false,
        }
    }
}
