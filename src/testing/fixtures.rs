//! Small hand-built record sets for edge cases.
//!
//! The bundled datasets exercise the ordinary paths; these fixtures isolate one behavior
//! each: a member in two clubs, a topping shared by two cakes, a cohort with a known number
//! of instructors, and a constellation that reappears after another one.

use crate::datasets::{Cake, Club, Cohort, Instructor, Kitty, Star};

/// Two clubs, with Pam in both: `Art [Pam, Lou]` and `Chess [Pam]`.
///
/// # Example
///
/// ```
/// use prototypes::testing::two_clubs_sharing_a_member;
///
/// assert_eq!(two_clubs_sharing_a_member().len(), 2);
/// ```
#[must_use]
pub fn two_clubs_sharing_a_member() -> Vec<Club> {
    vec![
        Club {
            club: "Art".to_string(),
            members: vec!["Pam".to_string(), "Lou".to_string()],
        },
        Club {
            club: "Chess".to_string(),
            members: vec!["Pam".to_string()],
        },
    ]
}

/// Two cakes whose toppings are `[a, b]` and `[b, c]`.
#[must_use]
pub fn cakes_sharing_a_topping() -> Vec<Cake> {
    let cake = |flavor: &str, toppings: [&str; 2], in_stock: u32| Cake {
        cake_flavor: flavor.to_string(),
        filling: None,
        frosting: "buttercream".to_string(),
        toppings: toppings.iter().map(ToString::to_string).collect(),
        in_stock,
    };
    vec![cake("vanilla", ["a", "b"], 3), cake("lemon", ["b", "c"], 0)]
}

/// A single orange kitten, Tiger, aged 5.
#[must_use]
pub fn tiger() -> Kitty {
    Kitty {
        name: "Tiger".to_string(),
        age: 5,
        color: "orange".to_string(),
    }
}

/// Cohort 1806 in module 1 with 20 students.
#[must_use]
pub fn cohort_of_twenty() -> Cohort {
    Cohort {
        cohort: 1806,
        module: 1,
        student_count: 20,
        curriculum: vec!["javascript".to_string(), "html".to_string()],
    }
}

/// `count` instructors in `module`, named `Instructor 1`, `Instructor 2`, ...
#[must_use]
pub fn instructors_in_module(module: u32, count: usize) -> Vec<Instructor> {
    (1..=count)
        .map(|n| Instructor {
            name: format!("Instructor {n}"),
            module,
            teaches: vec!["javascript".to_string()],
        })
        .collect()
}

/// Stars whose magnitude order visits `Orion, Lyra, Orion`.
#[must_use]
pub fn stars_revisiting_a_constellation() -> Vec<Star> {
    let star = |name: &str, magnitude: f64, constellation: &str| Star {
        name: name.to_string(),
        visual_magnitude: magnitude,
        constellation: constellation.to_string(),
        light_years_from_earth: 100.0,
        color: "blue".to_string(),
    };
    vec![
        star("Betelgeuse", 0.50, "Orion"),
        star("Rigel", 0.13, "Orion"),
        star("Vega", 0.30, "Lyra"),
    ]
}
