//! Dinosaurs: movies, their dinosaurs, and the people cast in them.
//!
//! An actor's age in a movie is `yearReleased - yearBorn`; an actor born after the release
//! is an [`InvalidAge`](crate::TransformError::InvalidAge). Cast names with no entry in the
//! humans dataset are skipped everywhere.

use crate::datasets::{Dinosaur, Human, Movie};
use crate::error::{TransformError, TransformResult};
use crate::{Average, Count, PCollection, TransformConfig, from_iter, from_slice};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UncastActor {
    pub name: String,
    pub nationality: String,
    pub imdb_star_meter_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorAges {
    pub name: String,
    pub ages: Vec<u32>,
}

fn years_born(humans: &IndexMap<String, Human>) -> PCollection<(String, u32)> {
    from_iter(humans.iter().map(|(name, h)| (name.clone(), h.year_born)))
}

fn age_at(released: u32, born: u32, actor: &str, title: &str) -> TransformResult<u32> {
    released
        .checked_sub(born)
        .ok_or_else(|| TransformError::InvalidAge {
            key: format!("{actor} in {title}"),
        })
}

fn whole_years(title: &str, mean: f64) -> TransformResult<u32> {
    if mean.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&mean) {
        Ok(mean.floor() as u32)
    } else {
        Err(TransformError::InvalidAge {
            key: title.to_string(),
        })
    }
}

/// For each movie title, how many of its dinosaurs are awesome.
///
/// Dinosaurs missing from `dinosaurs` do not count.
pub fn count_awesome_dinosaurs(
    dinosaurs: &IndexMap<String, Dinosaur>,
    movies: &[Movie],
) -> IndexMap<String, u64> {
    let awesome = from_iter(dinosaurs.iter().map(|(name, d)| (name.clone(), *d)))
        .filter_values(|d| d.is_awesome);
    from_slice(movies)
        .map(|m| {
            let count = from_slice(&m.dinos)
                .map(|d| (d.clone(), ()))
                .join_inner(&awesome)
                .combine_globally(Count);
            (m.title.clone(), count)
        })
        .into_index_map()
}

/// Average cast age per movie, grouped by director.
///
/// Directors and their titles keep movie order. The mean is rounded down.
///
/// # Errors
/// - [`TransformError::DivisionByZero`] keyed by the title of a movie with no known cast
///   member, unless `config` supplies a sentinel.
/// - [`TransformError::InvalidAge`] for a cast member born after the release, or a
///   sentinel that is negative or not a number.
pub fn average_age_per_movie(
    humans: &IndexMap<String, Human>,
    movies: &[Movie],
    config: &TransformConfig,
) -> TransformResult<IndexMap<String, IndexMap<String, u32>>> {
    let born = years_born(humans);
    let averages = from_slice(movies).try_map(|m| -> TransformResult<(String, (String, u32))> {
        let mean = from_slice(&m.cast)
            .map(|actor| (actor.clone(), ()))
            .join_inner(&born)
            .try_map(|(actor, (_, year))| age_at(m.year_released, *year, actor, &m.title))?
            .combine_globally(Average);
        let mean = config.resolve_mean(&m.title, mean)?;
        Ok((m.director.clone(), (m.title.clone(), whole_years(&m.title, mean)?)))
    })?;
    Ok(averages
        .group_by_key()
        .map_values(|titles| titles.iter().cloned().collect::<IndexMap<_, _>>())
        .into_index_map())
}

/// Humans who appear in no movie's cast, stably sorted by nationality.
pub fn uncast_actors(humans: &IndexMap<String, Human>, movies: &[Movie]) -> Vec<UncastActor> {
    let cast = from_slice(movies)
        .flat_map(|m| m.cast.clone())
        .distinct()
        .map(|name| (name.clone(), ()));
    from_iter(humans.iter().map(|(name, h)| (name.clone(), h.clone())))
        .join_left(&cast)
        .filter(|(_, (_, appeared))| appeared.is_none())
        .map(|(name, (h, _))| UncastActor {
            name: name.clone(),
            nationality: h.nationality.clone(),
            imdb_star_meter_rating: h.imdb_star_meter_rating,
        })
        .sort_by_key(|a| a.nationality.clone())
        .collect_seq()
}

/// Every cast human with their age in each movie they appear in.
///
/// Actors follow the humans dataset order; ages follow movie order.
///
/// # Errors
/// [`TransformError::InvalidAge`] for an actor born after a movie they appear in.
pub fn actors_ages_in_movies(
    humans: &IndexMap<String, Human>,
    movies: &[Movie],
) -> TransformResult<Vec<ActorAges>> {
    let appearances = from_slice(movies)
        .flat_map(|m| {
            m.cast
                .iter()
                .map(|actor| (actor.clone(), (m.title.clone(), m.year_released)))
                .collect::<Vec<_>>()
        })
        .group_by_key();
    let ages = years_born(humans)
        .join_inner(&appearances)
        .try_map(|(name, (born, released))| -> TransformResult<ActorAges> {
            let ages = released
                .iter()
                .map(|(title, year)| age_at(*year, *born, name, title))
                .collect::<TransformResult<Vec<_>>>()?;
            Ok(ActorAges {
                name: name.clone(),
                ages,
            })
        })?;
    Ok(ages.collect_seq())
}
