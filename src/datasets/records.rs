//! Record types for the bundled datasets.
//!
//! Field names follow the fixture files (`camelCase`). Records that appear as values of a
//! keyed dataset (weapons, dinosaurs, humans, constellations) do not carry their own key.

use super::Record;
use crate::validation::{Validate, ValidationResult, combine_validations, validators};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kitty {
    pub name: String,
    pub age: u32,
    pub color: String,
}

impl Record for Kitty {
    const FIELDS: &'static [&'static str] = &["name", "age", "color"];
}

impl Validate for Kitty {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("name", &self.name),
            validators::not_empty("color", &self.color),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub club: String,
    pub members: Vec<String>,
}

impl Record for Club {
    const FIELDS: &'static [&'static str] = &["club", "members"];
}

impl Validate for Club {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("club", &self.club),
            validators::all_not_empty("members", &self.members),
        ])
    }
}

/// One Turing module: how many students and instructors it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mod {
    #[serde(rename = "mod")]
    pub module: u32,
    pub students: u32,
    pub instructors: u32,
}

impl Record for Mod {
    const FIELDS: &'static [&'static str] = &["mod", "students", "instructors"];
}

impl Validate for Mod {
    fn validate(&self) -> ValidationResult {
        validators::in_range("mod", self.module, 1, 4)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    pub cake_flavor: String,
    #[serde(default)]
    pub filling: Option<String>,
    pub frosting: String,
    pub toppings: Vec<String>,
    pub in_stock: u32,
}

impl Record for Cake {
    const FIELDS: &'static [&'static str] =
        &["cakeFlavor", "frosting", "toppings", "inStock"];
}

impl Validate for Cake {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("cakeFlavor", &self.cake_flavor),
            validators::all_not_empty("toppings", &self.toppings),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub room_letter: String,
    pub program: String,
    pub capacity: u32,
}

impl Record for Classroom {
    const FIELDS: &'static [&'static str] = &["roomLetter", "program", "capacity"];
}

impl Validate for Classroom {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("roomLetter", &self.room_letter),
            validators::not_empty("program", &self.program),
            validators::in_range("capacity", self.capacity, 1, 1_000),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalPark {
    pub name: String,
    /// The state the park is in.
    pub location: String,
    pub visited: bool,
    pub activities: Vec<String>,
}

impl Record for NationalPark {
    const FIELDS: &'static [&'static str] = &["name", "location", "visited", "activities"];
}

impl Validate for NationalPark {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("name", &self.name),
            validators::not_empty("location", &self.location),
            validators::all_not_empty("activities", &self.activities),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub abv: f64,
    pub ibu: u32,
}

impl Validate for Beer {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("name", &self.name),
            validators::finite("abv", self.abv),
            validators::in_range("abv", self.abv, 0.0, 100.0),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brewery {
    pub name: String,
    pub location: String,
    pub beers: Vec<Beer>,
}

impl Record for Brewery {
    const FIELDS: &'static [&'static str] = &["name", "location", "beers"];
}

impl Validate for Brewery {
    fn validate(&self) -> ValidationResult {
        let mut checks = vec![validators::not_empty("name", &self.name)];
        checks.extend(self.beers.iter().map(Validate::validate));
        combine_validations(checks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub module: u32,
    pub teaches: Vec<String>,
}

impl Record for Instructor {
    const FIELDS: &'static [&'static str] = &["name", "module", "teaches"];
}

impl Validate for Instructor {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("name", &self.name),
            validators::in_range("module", self.module, 1, 4),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub cohort: u32,
    pub module: u32,
    pub student_count: u32,
    pub curriculum: Vec<String>,
}

impl Record for Cohort {
    const FIELDS: &'static [&'static str] = &["cohort", "module", "studentCount", "curriculum"];
}

impl Validate for Cohort {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::in_range("module", self.module, 1, 4),
            validators::all_not_empty("curriculum", &self.curriculum),
        ])
    }
}

/// A sidekick as listed on its boss: a name to look up in the sidekicks dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidekickRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub sidekicks: Vec<SidekickRef>,
}

impl Record for Boss {
    const FIELDS: &'static [&'static str] = &["name", "sidekicks"];
}

impl Validate for Boss {
    fn validate(&self) -> ValidationResult {
        validators::not_empty("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidekick {
    pub name: String,
    pub boss: String,
    pub loyalty_to_boss: u32,
}

impl Record for Sidekick {
    const FIELDS: &'static [&'static str] = &["name", "boss", "loyaltyToBoss"];
}

impl Validate for Sidekick {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("name", &self.name),
            validators::in_range("loyaltyToBoss", self.loyalty_to_boss, 0, 100),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constellation {
    pub names: Vec<String>,
    pub stars: Vec<String>,
}

impl Record for Constellation {
    const FIELDS: &'static [&'static str] = &["names", "stars"];
}

impl Validate for Constellation {
    fn validate(&self) -> ValidationResult {
        validators::all_not_empty("stars", &self.stars)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub name: String,
    pub visual_magnitude: f64,
    pub constellation: String,
    pub light_years_from_earth: f64,
    pub color: String,
}

impl Record for Star {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "visualMagnitude",
        "constellation",
        "lightYearsFromEarth",
        "color",
    ];
}

impl Validate for Star {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("name", &self.name),
            validators::finite("visualMagnitude", self.visual_magnitude),
            validators::finite("lightYearsFromEarth", self.light_years_from_earth),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: u32,
    pub range: u32,
}

impl Record for Weapon {
    const FIELDS: &'static [&'static str] = &["damage", "range"];
}

impl Validate for Weapon {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub weapons: Vec<String>,
}

impl Record for Character {
    const FIELDS: &'static [&'static str] = &["name", "weapons"];
}

impl Validate for Character {
    fn validate(&self) -> ValidationResult {
        validators::not_empty("name", &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub carnivore: bool,
    pub is_awesome: bool,
}

impl Record for Dinosaur {
    const FIELDS: &'static [&'static str] = &["carnivore", "isAwesome"];
}

impl Validate for Dinosaur {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Human {
    pub year_born: u32,
    pub nationality: String,
    pub imdb_star_meter_rating: u32,
}

impl Record for Human {
    const FIELDS: &'static [&'static str] = &["yearBorn", "nationality", "imdbStarMeterRating"];
}

impl Validate for Human {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::in_range("yearBorn", self.year_born, 1800, 2100),
            validators::not_empty("nationality", &self.nationality),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub cast: Vec<String>,
    pub dinos: Vec<String>,
    pub year_released: u32,
}

impl Record for Movie {
    const FIELDS: &'static [&'static str] =
        &["title", "director", "cast", "dinos", "yearReleased"];
}

impl Validate for Movie {
    fn validate(&self) -> ValidationResult {
        combine_validations(vec![
            validators::not_empty("title", &self.title),
            validators::not_empty("director", &self.director),
            validators::in_range("yearReleased", self.year_released, 1800, 2100),
        ])
    }
}
