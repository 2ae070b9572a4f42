use crate::datasets::NationalPark;
use crate::from_slice;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkVisitList {
    pub parks_to_visit: Vec<String>,
    pub parks_visited: Vec<String>,
}

/// Split park names into not yet visited and visited, each in input order.
pub fn park_visit_list(parks: &[NationalPark]) -> ParkVisitList {
    from_slice(parks).fold(ParkVisitList::default(), |mut acc, park| {
        let bucket = if park.visited {
            &mut acc.parks_visited
        } else {
            &mut acc.parks_to_visit
        };
        bucket.push(park.name.clone());
        acc
    })
}

/// `(state, park)` for every park.
pub fn park_in_each_state(parks: &[NationalPark]) -> Vec<(String, String)> {
    from_slice(parks)
        .map(|p| (p.location.clone(), p.name.clone()))
        .collect_seq()
}

/// Every activity offered by any park, once, in first-seen order.
pub fn park_activities(parks: &[NationalPark]) -> Vec<String> {
    from_slice(parks)
        .flat_map(|p| p.activities.clone())
        .distinct()
        .collect_seq()
}
