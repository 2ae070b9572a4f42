use anyhow::Result;
use indexmap::IndexMap;
use prototypes::Datasets;
use prototypes::datasets::{Constellation, Star};
use prototypes::prompts::astronomy::*;
use prototypes::testing::*;

fn names(stars: &[Star]) -> Vec<&str> {
    stars.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn stars_named_by_constellations() -> Result<()> {
    let data = Datasets::load()?;
    let stars = stars_in_constellations(&data.constellations, &data.stars);
    assert_eq!(names(&stars), vec!["Rigel", "Betelgeuse"]);
    assert_eq!(stars[0].visual_magnitude, 0.13);
    assert_eq!(stars[0].light_years_from_earth, 860.0);
    assert_eq!(stars[1].color, "red");
    Ok(())
}

#[test]
fn later_constellations_and_later_stars_come_first() {
    let listing = |stars: &[&str]| Constellation {
        names: vec![],
        stars: stars.iter().map(ToString::to_string).collect(),
    };
    let mut constellations = IndexMap::new();
    constellations.insert("orion".to_string(), listing(&["Rigel", "Betelgeuse", "Saiph"]));
    constellations.insert("lyra".to_string(), listing(&["Vega"]));

    let stars = stars_revisiting_a_constellation();
    let found = stars_in_constellations(&constellations, &stars);
    assert_eq!(names(&found), vec!["Vega", "Betelgeuse", "Rigel"]);
}

#[test]
fn stars_grouped_by_color() -> Result<()> {
    let data = Datasets::load()?;
    let by_color = stars_by_color(&data.stars);
    let flat: Vec<(&str, Vec<&str>)> = by_color
        .iter()
        .map(|(color, stars)| (color.as_str(), names(stars)))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("blue", vec!["Rigel", "Sirius", "Vega", "Alioth", "Alnitak"]),
            ("white", vec!["Canopus", "Procyon"]),
            ("yellow", vec!["Capella", "Polaris"]),
            ("orange", vec!["Arcturus"]),
            ("red", vec!["Betelgeuse"]),
        ]
    );
    Ok(())
}

#[test]
fn revisited_constellation_moves_to_the_end() {
    assert_eq!(
        constellations_stars_exist_in(&stars_revisiting_a_constellation()),
        vec!["Lyra", "Orion"]
    );
}

#[test]
fn bundled_constellation_order() -> Result<()> {
    let data = Datasets::load()?;
    assert_collections_equal(
        &constellations_stars_exist_in(&data.stars),
        &[
            "Canis Major",
            "Carina",
            "Boötes",
            "Auriga",
            "Lyra",
            "Canis Minor",
            "The Plow",
            "Orion",
            "The Little Dipper",
        ]
        .map(String::from),
    );
    Ok(())
}
