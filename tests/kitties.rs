use anyhow::Result;
use prototypes::Datasets;
use prototypes::datasets::Kitty;
use prototypes::prompts::kitties::*;
use prototypes::testing::*;

fn names(kitties: &[Kitty]) -> Vec<&str> {
    kitties.iter().map(|k| k.name.as_str()).collect()
}

#[test]
fn orange_kitties() -> Result<()> {
    let data = Datasets::load()?;
    assert_eq!(orange_kitty_names(&data.kitties), vec!["Tiger", "Snickers"]);
    Ok(())
}

#[test]
fn sort_by_age_is_descending_and_leaves_input_alone() -> Result<()> {
    let data = Datasets::load()?;
    let sorted = sort_by_age(&data.kitties);
    assert_eq!(names(&sorted), vec!["Snickers", "Tiger", "Felicia", "Max"]);
    assert_eq!(names(&data.kitties), vec!["Felicia", "Tiger", "Snickers", "Max"]);
    Ok(())
}

#[test]
fn sort_by_age_keeps_ties_in_input_order() {
    let mut twin = tiger();
    twin.name = "Tigger".to_string();
    let sorted = sort_by_age(&[tiger(), twin]);
    assert_eq!(names(&sorted), vec!["Tiger", "Tigger"]);
}

#[test]
fn grow_up_mutates_in_place_and_accumulates() -> Result<()> {
    let mut kitties = vec![tiger()];
    let grown = grow_up(&mut kitties);
    assert_eq!(grown[0].age, 7);
    assert_eq!(kitties[0].age, 7);

    grow_up(&mut kitties);
    assert_eq!(kitties[0].age, 9);

    let mut data = Datasets::load()?.kitties;
    let grown = grow_up(&mut data);
    assert_eq!(
        grown[..2],
        [
            Kitty {
                name: "Felicia".to_string(),
                age: 4,
                color: "grey".to_string(),
            },
            Kitty {
                name: "Tiger".to_string(),
                age: 7,
                color: "orange".to_string(),
            },
        ]
    );
    let ages: Vec<u32> = grown.iter().map(|k| k.age).collect();
    assert_eq!(ages, vec![4, 7, 10, 3]);
    Ok(())
}

#[test]
fn grow_up_stops_at_the_largest_age() {
    let mut old = tiger();
    old.age = u32::MAX - 1;
    let mut kitties = vec![old];
    assert_eq!(grow_up(&mut kitties)[0].age, u32::MAX);
}

#[test]
fn empty_kitties() {
    assert!(orange_kitty_names(&[]).is_empty());
    assert!(sort_by_age(&[]).is_empty());
    assert!(grow_up(&mut []).is_empty());
}
