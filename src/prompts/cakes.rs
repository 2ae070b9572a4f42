//! Cakes: stock levels, inventory and toppings.

use crate::datasets::Cake;
use crate::{Count, PCollection, Sum, from_slice};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeStock {
    pub flavor: String,
    pub in_stock: u32,
}

/// Flavor and stock count of every cake.
pub fn stock_per_cake(cakes: &[Cake]) -> Vec<CakeStock> {
    from_slice(cakes)
        .map(|c| CakeStock {
            flavor: c.cake_flavor.clone(),
            in_stock: c.in_stock,
        })
        .collect_seq()
}

/// Cakes with at least one in stock.
pub fn only_in_stock(cakes: &[Cake]) -> Vec<Cake> {
    from_slice(cakes).filter(|c| c.in_stock > 0).collect_seq()
}

/// Total number of cakes in stock. Zero for no cakes.
pub fn total_inventory(cakes: &[Cake]) -> u32 {
    from_slice(cakes)
        .map(|c| c.in_stock)
        .combine_globally(Sum::<u32>::new())
}

/// Every topping used by any cake, once, in first-use order.
pub fn all_toppings(cakes: &[Cake]) -> Vec<String> {
    toppings(cakes).distinct().collect_seq()
}

/// How many cakes use each topping, keyed in first-use order.
pub fn grocery_list(cakes: &[Cake]) -> IndexMap<String, u64> {
    toppings(cakes)
        .key_by(|t| t.clone())
        .combine_values(Count)
        .into_index_map()
}

fn toppings(cakes: &[Cake]) -> PCollection<String> {
    from_slice(cakes).flat_map(|c| c.toppings.clone())
}
