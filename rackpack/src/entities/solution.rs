use std::time::Instant;

use crate::entities::Bin;

/// Fully packed set of bins, the result of a single packing run.
/// Read-only once produced; runs do not share bins.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The populated bins, in allocation order
    pub bins: Vec<Bin>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self {
            bins,
            time_stamp: Instant::now(),
        }
    }

    /// Fraction of the allocated capacity that is occupied.
    /// Zero when no bins were allocated.
    pub fn density(&self) -> f32 {
        let total_capacity = self.bins.iter().map(|bin| bin.capacity).sum::<u64>();

        match total_capacity {
            0 => 0.0,
            _ => self.total_occupied() as f32 / total_capacity as f32,
        }
    }

    pub fn total_occupied(&self) -> u64 {
        self.bins.iter().map(|bin| bin.occupied()).sum()
    }
}
