use thiserror::Error;

/// Failure modes of a packing run. None of these are retried internally;
/// callers adjust the inputs and run again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// A bin was supplied without a positive capacity.
    #[error("bin {bin_id} has no positive capacity")]
    InvalidCapacity { bin_id: usize },

    /// The bins cannot hold the items, regardless of placement.
    #[error("total item size {demand} exceeds total bin capacity {supply}")]
    InsufficientCapacity { demand: u64, supply: u64 },

    /// An item was not admitted by any bin, despite sufficient aggregate capacity.
    #[error("item {item_id} of size {size} does not fit in any bin")]
    PackingOverflow { item_id: usize, size: u64 },
}
