use anyhow::Result;
use indexmap::IndexMap;
use prototypes::datasets::{Human, Movie};
use prototypes::prompts::dinosaurs::*;
use prototypes::testing::*;
use prototypes::*;

#[test]
fn awesome_dinosaurs_per_movie() -> Result<()> {
    let data = Datasets::load()?;
    assert_index_map_eq(
        &count_awesome_dinosaurs(&data.dinosaurs, &data.movies),
        &[
            ("Jurassic Park", 5),
            ("The Lost World: Jurassic Park", 8),
            ("Jurassic Park III", 9),
            ("Jurassic World", 11),
            ("Jurassic World: Fallen Kingdom", 18),
        ],
    );
    Ok(())
}

#[test]
fn average_age_per_movie_by_director() -> Result<()> {
    let data = Datasets::load()?;
    let averages = average_age_per_movie(&data.humans, &data.movies, &TransformConfig::default())?;
    let flat: Vec<(&str, Vec<(&str, u32)>)> = averages
        .iter()
        .map(|(director, titles)| {
            (
                director.as_str(),
                titles.iter().map(|(t, age)| (t.as_str(), *age)).collect(),
            )
        })
        .collect();
    assert_eq!(
        flat,
        vec![
            (
                "Steven Spielberg",
                vec![("Jurassic Park", 34), ("The Lost World: Jurassic Park", 37)]
            ),
            ("Joe Johnston", vec![("Jurassic Park III", 44)]),
            ("Colin Trevorrow", vec![("Jurassic World", 56)]),
            ("J. A. Bayona", vec![("Jurassic World: Fallen Kingdom", 59)]),
        ]
    );
    Ok(())
}

fn unknown_cast_movie() -> Movie {
    Movie {
        title: "Carnosaur".to_string(),
        director: "Adam Simon".to_string(),
        cast: vec!["Diane Ladd".to_string()],
        dinos: vec![],
        year_released: 1993,
    }
}

#[test]
fn movie_without_known_cast_follows_the_zero_divisor_policy() -> Result<()> {
    let humans: IndexMap<String, Human> = IndexMap::new();
    let movies = [unknown_cast_movie()];

    let err = average_age_per_movie(&humans, &movies, &TransformConfig::default()).unwrap_err();
    assert_eq!(
        err,
        TransformError::DivisionByZero {
            key: "Carnosaur".to_string()
        }
    );

    let sentinel = TransformConfig::new().with_zero_divisor(ZeroDivisor::Sentinel { value: 0.0 });
    let averages = average_age_per_movie(&humans, &movies, &sentinel)?;
    assert_eq!(averages["Adam Simon"]["Carnosaur"], 0);
    Ok(())
}

#[test]
fn uncast_actors_sorted_by_nationality() -> Result<()> {
    let data = Datasets::load()?;
    let uncast = uncast_actors(&data.humans, &data.movies);
    let flat: Vec<(&str, &str, u32)> = uncast
        .iter()
        .map(|a| (a.name.as_str(), a.nationality.as_str(), a.imdb_star_meter_rating))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("Justin Duncan", "Alien", 0),
            ("Karin Ohman", "Chinese", 0),
            ("Tom Wilhoit", "Kiwi", 1),
            ("Jeo D", "Martian", 0),
        ]
    );
    assert!(uncast_actors(&data.humans, &[]).len() == data.humans.len());
    Ok(())
}

#[test]
fn ages_of_each_actor_across_movies() -> Result<()> {
    let data = Datasets::load()?;
    let ages: Vec<(String, Vec<u32>)> = actors_ages_in_movies(&data.humans, &data.movies)?
        .into_iter()
        .map(|a| (a.name, a.ages))
        .collect();
    assert_collections_equal(
        &ages,
        &[
            ("Sam Neill".to_string(), vec![46, 54]),
            ("Laura Dern".to_string(), vec![26, 34]),
            ("Jeff Goldblum".to_string(), vec![41, 45, 63, 66]),
            ("Richard Attenborough".to_string(), vec![70, 74, 92, 95]),
            ("Ariana Richards".to_string(), vec![14, 18]),
            ("Joseph Mazello".to_string(), vec![10, 14]),
            ("BD Wong".to_string(), vec![33, 55, 58]),
            ("Chris Pratt".to_string(), vec![36, 39]),
            ("Bryce Dallas Howard".to_string(), vec![34, 37]),
        ],
    );
    Ok(())
}

#[test]
fn unknown_cast_members_are_skipped() -> Result<()> {
    let data = Datasets::load()?;
    let movies = [unknown_cast_movie()];
    assert!(actors_ages_in_movies(&data.humans, &movies)?.is_empty());
    assert_eq!(uncast_actors(&data.humans, &movies).len(), data.humans.len());
    Ok(())
}

#[test]
fn actor_born_after_release_is_an_invalid_age() {
    let mut humans = IndexMap::new();
    humans.insert(
        "Diane Ladd".to_string(),
        Human {
            year_born: 2001,
            nationality: "American".to_string(),
            imdb_star_meter_rating: 9,
        },
    );
    let movies = [unknown_cast_movie()];
    let expected = TransformError::InvalidAge {
        key: "Diane Ladd in Carnosaur".to_string(),
    };

    assert_eq!(actors_ages_in_movies(&humans, &movies).unwrap_err(), expected);
    assert_eq!(
        average_age_per_movie(&humans, &movies, &TransformConfig::default()).unwrap_err(),
        expected
    );
}

#[test]
fn negative_or_nan_sentinel_is_not_an_average_age() {
    let humans: IndexMap<String, Human> = IndexMap::new();
    let movies = [unknown_cast_movie()];
    for value in [-1.0, f64::NAN] {
        let config = TransformConfig::new().with_zero_divisor(ZeroDivisor::Sentinel { value });
        assert_eq!(
            average_age_per_movie(&humans, &movies, &config).unwrap_err(),
            TransformError::InvalidAge {
                key: "Carnosaur".to_string()
            }
        );
    }
}
