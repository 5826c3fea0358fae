use std::fmt;

use itertools::Itertools;

use crate::entities::Item;
use crate::error::PackError;

/// A container with fixed capacity holding [`Item`]s in the order they were placed.
/// Append-only: items are never removed and the capacity never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    /// Unique identifier, also its position in the allocation order
    pub id: usize,
    /// Total capacity in units, fixed at construction
    pub capacity: u64,
    /// Items currently held, in placement order
    pub items: Vec<Item>,
    /// Capacity still available
    pub remaining: u64,
}

impl Bin {
    pub fn new(id: usize, capacity: u64) -> Result<Self, PackError> {
        if capacity == 0 {
            return Err(PackError::InvalidCapacity { bin_id: id });
        }
        Ok(Self {
            id,
            capacity,
            items: vec![],
            remaining: capacity,
        })
    }

    /// Appends `item` iff it fits within the remaining capacity and reports
    /// whether it was admitted. The sole mutation entry point.
    pub fn try_add(&mut self, item: Item) -> bool {
        if item.size <= self.remaining {
            self.remaining -= item.size;
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Units currently occupied.
    pub fn occupied(&self) -> u64 {
        self.capacity - self.remaining
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bin {} [{}/{} units, {} free]: {:?}",
            self.id,
            self.occupied(),
            self.capacity,
            self.remaining,
            self.items.iter().map(|item| item.size).collect_vec()
        )
    }
}
