//! Breweries: beer counts and the strongest beer.

use crate::datasets::{Beer, Brewery};
use crate::{Sum, from_slice};
use ordered_float::OrderedFloat;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreweryBeerCount {
    pub name: String,
    pub beer_count: usize,
}

/// Number of beers across all breweries.
pub fn beer_count(breweries: &[Brewery]) -> usize {
    from_slice(breweries)
        .map(|b| b.beers.len())
        .combine_globally(Sum::<usize>::new())
}

pub fn brewery_beer_count(breweries: &[Brewery]) -> Vec<BreweryBeerCount> {
    from_slice(breweries)
        .map(|b| BreweryBeerCount {
            name: b.name.clone(),
            beer_count: b.beers.len(),
        })
        .collect_seq()
}

/// The beer with the highest ABV, or `None` when there are no beers.
///
/// On a tie the beer listed first wins.
pub fn highest_abv_beer(breweries: &[Brewery]) -> Option<Beer> {
    from_slice(breweries)
        .flat_map(|b| b.beers.clone())
        .first_max_by(|beer| OrderedFloat(beer.abv))
}
