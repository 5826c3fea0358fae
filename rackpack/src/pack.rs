use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::classify::split_by_size;
use crate::entities::{Bin, Instance, Item, Solution};
use crate::error::PackError;
use crate::util::PackConfig;
use crate::util::assertions;

/// Deterministic placement strategies.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStrategy {
    /// Fill the bins in order, placing each item in the first bin with room.
    Sequential,
    /// Cycle the bins round-robin, falling back to the next bin with room.
    Even,
}

/// Packs the items of an [`Instance`] into bins according to a [`PackConfig`].
/// Stateless with respect to prior runs; every call packs from scratch.
pub struct Packer {
    pub instance: Instance,
    pub config: PackConfig,
}

impl Packer {
    pub fn new(instance: Instance, config: PackConfig) -> Self {
        Self { instance, config }
    }

    /// Runs the configured placement strategy.
    /// Either returns a complete [`Solution`] or fails without one.
    pub fn pack(&self) -> Result<Solution, PackError> {
        let solution = match self.config.strategy {
            PlacementStrategy::Sequential => {
                order_sequentially(&self.instance, self.config.large_items_at_top)
            }
            PlacementStrategy::Even => {
                evenly_distribute(&self.instance, self.config.large_items_at_top)
            }
        }?;

        debug_assert!(assertions::solution_within_capacity(&solution));
        debug_assert!(assertions::solution_matches_instance(
            &self.instance,
            &solution
        ));

        info!(
            "[PACK] placed {} items into {} bins with a density of {:.3}%",
            self.instance.total_item_qty(),
            solution.bins.len(),
            solution.density() * 100.0
        );

        Ok(solution)
    }
}

/// Returns the number of leading entries of `bin_capacities` whose sum covers
/// the total item size, scanning in the order given. A greedy capacity check,
/// not an optimizer: it never reorders the capacities.
pub fn compute_bin_count(items: &[Item], bin_capacities: &[u64]) -> Result<usize, PackError> {
    let demand: u64 = items.iter().map(|item| item.size).sum();

    let mut covered: u64 = 0;
    let mut count = 0;
    while covered < demand {
        match bin_capacities.get(count) {
            Some(capacity) => {
                covered += capacity;
                count += 1;
            }
            None => {
                return Err(PackError::InsufficientCapacity {
                    demand,
                    supply: covered,
                });
            }
        }
    }
    Ok(count)
}

/// First-fit placement: classifies the items, allocates the leading bins
/// required to cover their total size, then places each item in the first bin
/// that admits it. The scan starts at bin 0 for every item.
pub fn order_sequentially(
    instance: &Instance,
    large_items_at_top: bool,
) -> Result<Solution, PackError> {
    let bin_count = compute_bin_count(&instance.items, &instance.bin_capacities)?;
    let mut bins = allocate_bins(&instance.bin_capacities[..bin_count])?;

    for item in classified_order(instance, large_items_at_top) {
        match bins.iter_mut().position(|bin| bin.try_add(item)) {
            Some(id) => debug!("[SEQ] item {} (size {}) -> bin {}", item.id, item.size, id),
            None => {
                return Err(PackError::PackingOverflow {
                    item_id: item.id,
                    size: item.size,
                });
            }
        }
    }

    Ok(Solution::new(bins))
}

/// Round-robin placement: item `k` is offered to bin `k mod n` first, then to
/// the remaining bins in cycling order, wrapping once. All supplied bins are
/// allocated; the capacity check still runs up front so a shortfall surfaces
/// before any bin exists.
pub fn evenly_distribute(
    instance: &Instance,
    large_items_at_top: bool,
) -> Result<Solution, PackError> {
    compute_bin_count(&instance.items, &instance.bin_capacities)?;
    let mut bins = allocate_bins(&instance.bin_capacities)?;
    let n = bins.len();

    for (k, item) in classified_order(instance, large_items_at_top)
        .into_iter()
        .enumerate()
    {
        let target = (0..n)
            .map(|offset| (k + offset) % n)
            .find(|&id| bins[id].try_add(item));

        match target {
            Some(id) => debug!("[EVEN] item {} (size {}) -> bin {}", item.id, item.size, id),
            None => {
                return Err(PackError::PackingOverflow {
                    item_id: item.id,
                    size: item.size,
                });
            }
        }
    }

    Ok(Solution::new(bins))
}

/// Logs the contents of every bin in the solution. Output only.
pub fn show(label: &str, solution: &Solution) {
    info!("{label} ({} bins):", solution.bins.len());
    for bin in &solution.bins {
        info!("  {bin}");
    }
}

fn allocate_bins(bin_capacities: &[u64]) -> Result<Vec<Bin>, PackError> {
    bin_capacities
        .iter()
        .enumerate()
        .map(|(id, &capacity)| Bin::new(id, capacity))
        .collect()
}

/// The items of the instance in classified order, flattened back into a
/// single sequence.
fn classified_order(instance: &Instance, large_items_at_top: bool) -> Vec<Item> {
    split_by_size(&instance.items, large_items_at_top)
        .into_iter()
        .flat_map(|group| group.items)
        .collect_vec()
}
