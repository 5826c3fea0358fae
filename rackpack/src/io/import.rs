use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{Instance, Item};
use crate::io::ext_repr::ExtInstance;

/// Imports an instance into the library, expanding each item type into one
/// [`Item`] per unit of demand with consecutive ids.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    ensure!(
        ext_instance.items.iter().all(|ext_item| ext_item.size > 0),
        "all item sizes must be positive"
    );

    let items = ext_instance
        .items
        .iter()
        .flat_map(|ext_item| itertools::repeat_n(ext_item.size, ext_item.demand as usize))
        .enumerate()
        .map(|(id, size)| Item::new(id, size))
        .collect_vec();

    let bin_capacities = ext_instance
        .bins
        .iter()
        .map(|ext_bin| ext_bin.capacity)
        .collect_vec();

    Ok(Instance::new(items, bin_capacities))
}
