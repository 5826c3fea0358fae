use itertools::Itertools;

use crate::entities::{Instance, Item, Solution};

/// Checks that no bin holds more than its capacity and that the remaining
/// capacity bookkeeping is consistent with the held items.
pub fn solution_within_capacity(solution: &Solution) -> bool {
    solution.bins.iter().all(|bin| {
        let held: u64 = bin.items.iter().map(|item| item.size).sum();
        held <= bin.capacity && bin.remaining == bin.capacity - held
    })
}

/// Checks that the solution holds exactly the items of the instance:
/// no item duplicated, dropped or split across bins.
pub fn solution_matches_instance(instance: &Instance, solution: &Solution) -> bool {
    let placed = solution
        .bins
        .iter()
        .flat_map(|bin| &bin.items)
        .map(|item| item.id)
        .sorted()
        .collect_vec();

    let expected = instance.items.iter().map(|item| item.id).sorted().collect_vec();

    placed == expected
}

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}
