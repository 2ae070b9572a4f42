//! Typed loading of the bundled JSON fixtures.
//!
//! This module provides:
//! - **Record types** for every dataset: see [`records`]
//! - **Typed loaders** with up-front field checks: [`load_array`] and [`load_keyed`]
//! - **The fixture bundle**: [`Datasets::load`] parses everything under `data/`
//!
//! # Notes
//! - Array datasets load into `Vec<T>`; object datasets load into an [`IndexMap`] keyed by
//!   the object key, in document order.
//! - Each record is checked against [`Record::FIELDS`] before it is deserialized, so a
//!   missing field is reported as [`DatasetError::MissingField`] naming the field.
//! - Deserialized records are run through [`Validate`] and rejected as
//!   [`DatasetError::Invalid`] when they fail.

pub mod records;

pub use records::*;

use crate::error::DatasetError;
use crate::validation::Validate;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// A record that can be loaded from a fixture.
pub trait Record: DeserializeOwned + Validate {
    /// Fields every raw record must carry. Nullable fields are left out.
    const FIELDS: &'static [&'static str];
}

/// Parse a JSON array of `T` records.
///
/// Records are labelled `#0`, `#1`, ... in errors.
///
/// # Errors
/// Returns a [`DatasetError`] if `json` is not an array of objects, or if any record is
/// missing a required field, fails to deserialize, or fails validation.
pub fn load_array<T: Record>(dataset: &'static str, json: &str) -> Result<Vec<T>, DatasetError> {
    let rows = match parse(dataset, json)? {
        Value::Array(rows) => rows,
        _ => {
            return Err(DatasetError::Shape {
                dataset,
                expected: "array",
            });
        }
    };
    let out = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| decode(dataset, format!("#{i}"), row))
        .collect::<Result<Vec<T>, _>>()?;
    debug!(dataset, records = out.len(), "dataset loaded");
    Ok(out)
}

/// Parse a JSON object of `key -> T` records, keeping document order.
///
/// Records are labelled by their key in errors.
///
/// # Errors
/// Returns a [`DatasetError`] if `json` is not an object of objects, or if any record is
/// missing a required field, fails to deserialize, or fails validation.
pub fn load_keyed<T: Record>(
    dataset: &'static str,
    json: &str,
) -> Result<IndexMap<String, T>, DatasetError> {
    let rows = match parse(dataset, json)? {
        Value::Object(rows) => rows,
        _ => {
            return Err(DatasetError::Shape {
                dataset,
                expected: "object",
            });
        }
    };
    let mut out = IndexMap::with_capacity(rows.len());
    for (key, row) in rows {
        let record = decode(dataset, format!("`{key}`"), row)?;
        out.insert(key, record);
    }
    debug!(dataset, records = out.len(), "dataset loaded");
    Ok(out)
}

fn parse(dataset: &'static str, json: &str) -> Result<Value, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse { dataset, source })
}

fn decode<T: Record>(dataset: &'static str, record: String, row: Value) -> Result<T, DatasetError> {
    let Value::Object(fields) = &row else {
        return Err(DatasetError::Shape {
            dataset,
            expected: "collection of objects",
        });
    };
    if let Some(field) = T::FIELDS.iter().copied().find(|f| !fields.contains_key(*f)) {
        return Err(DatasetError::MissingField {
            dataset,
            record,
            field,
        });
    }
    let value: T = serde_json::from_value(row).map_err(|source| DatasetError::Malformed {
        dataset,
        record: record.clone(),
        source,
    })?;
    value.validate().map_err(|errors| DatasetError::Invalid {
        dataset,
        record,
        errors,
    })?;
    Ok(value)
}

/// Every bundled dataset, parsed and validated.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub kitties: Vec<Kitty>,
    pub clubs: Vec<Club>,
    pub mods: Vec<Mod>,
    pub cakes: Vec<Cake>,
    pub classrooms: Vec<Classroom>,
    pub national_parks: Vec<NationalPark>,
    pub breweries: Vec<Brewery>,
    pub instructors: Vec<Instructor>,
    pub cohorts: Vec<Cohort>,
    pub bosses: IndexMap<String, Boss>,
    pub sidekicks: Vec<Sidekick>,
    pub constellations: IndexMap<String, Constellation>,
    pub stars: Vec<Star>,
    pub weapons: IndexMap<String, Weapon>,
    pub characters: Vec<Character>,
    pub dinosaurs: IndexMap<String, Dinosaur>,
    pub humans: IndexMap<String, Human>,
    pub movies: Vec<Movie>,
}

impl Datasets {
    /// Parse the fixtures compiled into the crate.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] hit while loading.
    pub fn load() -> Result<Self, DatasetError> {
        Ok(Self {
            kitties: load_array("kitties", include_str!("../../data/kitties.json"))?,
            clubs: load_array("clubs", include_str!("../../data/clubs.json"))?,
            mods: load_array("mods", include_str!("../../data/mods.json"))?,
            cakes: load_array("cakes", include_str!("../../data/cakes.json"))?,
            classrooms: load_array("classrooms", include_str!("../../data/classrooms.json"))?,
            national_parks: load_array(
                "nationalParks",
                include_str!("../../data/national_parks.json"),
            )?,
            breweries: load_array("breweries", include_str!("../../data/breweries.json"))?,
            instructors: load_array("instructors", include_str!("../../data/instructors.json"))?,
            cohorts: load_array("cohorts", include_str!("../../data/cohorts.json"))?,
            bosses: load_keyed("bosses", include_str!("../../data/bosses.json"))?,
            sidekicks: load_array("sidekicks", include_str!("../../data/sidekicks.json"))?,
            constellations: load_keyed(
                "constellations",
                include_str!("../../data/constellations.json"),
            )?,
            stars: load_array("stars", include_str!("../../data/stars.json"))?,
            weapons: load_keyed("weapons", include_str!("../../data/weapons.json"))?,
            characters: load_array("characters", include_str!("../../data/characters.json"))?,
            dinosaurs: load_keyed("dinosaurs", include_str!("../../data/dinosaurs.json"))?,
            humans: load_keyed("humans", include_str!("../../data/humans.json"))?,
            movies: load_array("movies", include_str!("../../data/movies.json"))?,
        })
    }
}
