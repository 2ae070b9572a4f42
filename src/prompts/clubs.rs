use crate::datasets::Club;
use crate::from_slice;
use indexmap::IndexMap;

/// Map every member to the clubs they belong to.
///
/// Members appear in the order they are first listed; each member's clubs follow the
/// order of the clubs dataset.
pub fn members_belonging_to_clubs(clubs: &[Club]) -> IndexMap<String, Vec<String>> {
    from_slice(clubs)
        .flat_map(|c| {
            c.members
                .iter()
                .map(|member| (member.clone(), c.club.clone()))
                .collect::<Vec<_>>()
        })
        .group_by_key()
        .into_index_map()
}
