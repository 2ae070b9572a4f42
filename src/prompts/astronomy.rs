//! Astronomy: stars, their colors, and the constellations they sit in.

use crate::datasets::{Constellation, Star};
use crate::{from_iter, from_slice};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;

/// Stars listed by any constellation that also appear in `stars`, most recent match first.
///
/// Constellations are visited in order and each of their star names in turn; every match
/// is placed at the front of the output. The last constellation's stars therefore come
/// first, and within a constellation the last listed star leads. Names with no star record
/// are skipped.
///
/// ```
/// use indexmap::IndexMap;
/// use prototypes::datasets::{Constellation, Star};
/// use prototypes::prompts::astronomy::stars_in_constellations;
///
/// let star = |name: &str| Star {
///     name: name.into(),
///     visual_magnitude: 1.0,
///     constellation: String::new(),
///     light_years_from_earth: 1.0,
///     color: "blue".into(),
/// };
/// let listing = |stars: &[&str]| Constellation {
///     names: vec![],
///     stars: stars.iter().map(|s| s.to_string()).collect(),
/// };
/// let mut constellations = IndexMap::new();
/// constellations.insert("orion".to_string(), listing(&["Betelgeuse", "Rigel"]));
/// constellations.insert("ursaMinor".to_string(), listing(&["Polaris"]));
///
/// let found = stars_in_constellations(&constellations, &[star("Rigel"), star("Polaris"), star("Betelgeuse")]);
/// let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, vec!["Polaris", "Rigel", "Betelgeuse"]);
/// ```
pub fn stars_in_constellations(
    constellations: &IndexMap<String, Constellation>,
    stars: &[Star],
) -> Vec<Star> {
    let by_name = from_slice(stars).key_by(|s| s.name.clone());
    let mut found = from_iter(constellations.values().flat_map(|c| c.stars.iter().cloned()))
        .map(|name| (name.clone(), ()))
        .join_inner(&by_name)
        .map(|(_, (_, star))| star.clone())
        .collect_seq();
    found.reverse();
    found
}

/// Stars grouped by color, colors in first-seen order.
pub fn stars_by_color(stars: &[Star]) -> IndexMap<String, Vec<Star>> {
    from_slice(stars)
        .key_by(|s| s.color.clone())
        .group_by_key()
        .into_index_map()
}

/// Constellation names, ordered by the brightest position at which each last appears.
///
/// Stars are sorted by visual magnitude (brightest first); every constellation is then
/// listed once, at its final occurrence in that order.
///
/// ```
/// use prototypes::datasets::Star;
/// use prototypes::prompts::astronomy::constellations_stars_exist_in;
///
/// let star = |name: &str, mag: f64, constellation: &str| Star {
///     name: name.into(),
///     visual_magnitude: mag,
///     constellation: constellation.into(),
///     light_years_from_earth: 0.0,
///     color: "blue".into(),
/// };
/// let stars = [star("Rigel", 0.13, "Orion"), star("Vega", 0.03, "Lyra"), star("Betelgeuse", 0.5, "Orion")];
/// assert_eq!(constellations_stars_exist_in(&stars), vec!["Lyra", "Orion"]);
/// ```
pub fn constellations_stars_exist_in(stars: &[Star]) -> Vec<String> {
    from_slice(stars)
        .sort_by_key(|s| OrderedFloat(s.visual_magnitude))
        .move_to_end_by(|s| s.constellation.clone())
        .collect_seq()
}
