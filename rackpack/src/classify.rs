use std::cmp::Reverse;

use itertools::Itertools;

use crate::entities::Item;

/// Items sharing the same size, in their original relative order.
/// Derived per invocation, never persisted.
#[derive(Debug, Clone)]
pub struct SizeGroup {
    pub size: u64,
    pub items: Vec<Item>,
}

/// Splits `items` into groups of equal size and orders the groups by size:
/// descending when `large_items_at_top` is true, ascending otherwise.
/// Grouping is stable: within a group, items keep their original relative order.
pub fn split_by_size(items: &[Item], large_items_at_top: bool) -> Vec<SizeGroup> {
    let sorted = match large_items_at_top {
        true => items.iter().copied().sorted_by_key(|item| Reverse(item.size)),
        false => items.iter().copied().sorted_by_key(|item| item.size),
    };

    let mut groups = vec![];
    for (size, chunk) in &sorted.chunk_by(|item| item.size) {
        groups.push(SizeGroup {
            size,
            items: chunk.collect(),
        });
    }
    groups
}
