use serde::{Deserialize, Serialize};

/// Packing instance
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Set of item types to be packed
    pub items: Vec<ExtItem>,
    /// The available bins, in the order they may be opened
    pub bins: Vec<ExtBin>,
}

/// Item type with a demand
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItem {
    /// Height of this item type in units
    pub size: u64,
    /// Amount of times this item has to be packed
    pub demand: u64,
}

/// A single bin
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBin {
    /// Capacity in units
    pub capacity: u64,
}

/// Packing solution
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    /// Populated bins which compose the solution
    pub bins: Vec<ExtBinContents>,
    /// Sum of the occupied units divided by the sum of the allocated capacities
    pub density: f32,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

/// Contents of a single packed bin
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBinContents {
    pub index: usize,
    pub capacity: u64,
    pub occupied: u64,
    /// Sizes of the held items, in placement order
    pub items: Vec<u64>,
}
