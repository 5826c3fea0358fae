use std::time::Instant;

use crate::entities::Solution;
use crate::io::ext_repr::{ExtBinContents, ExtSolution};

/// Exports a solution out of the library
pub fn export(solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        bins: solution
            .bins
            .iter()
            .map(|bin| ExtBinContents {
                index: bin.id,
                capacity: bin.capacity,
                occupied: bin.occupied(),
                items: bin.items.iter().map(|item| item.size).collect(),
            })
            .collect(),
        density: solution.density(),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}
